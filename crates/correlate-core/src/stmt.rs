mod expr;
pub use expr::Expr;

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_column;
pub use expr_column::ExprColumn;

mod expr_exists;
pub use expr_exists::ExprExists;

mod expr_in_list;
pub use expr_in_list::ExprInList;

mod expr_is_null;
pub use expr_is_null::ExprIsNull;

mod expr_not;
pub use expr_not::ExprNot;

mod expr_or;
pub use expr_or::ExprOr;

mod expr_raw;
pub use expr_raw::ExprRaw;

mod join;
pub use join::Join;

mod op_binary;
pub use op_binary::BinaryOp;

mod returning;
pub use returning::Returning;

mod select;
pub use select::Select;

mod source;
pub use source::Source;

mod value;
pub use value::Value;
