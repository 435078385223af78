mod amounts;
mod direction;
mod submit;
mod swap;

pub use amounts::{apply_edit, fee_adjusted_amount, AmountField, AmountState};
pub use direction::Direction;
pub use submit::{
    finite_positive_amount, permissive_amount, plan_submission, AmountPredicate, SwapParams,
};
pub use swap::Swap;
