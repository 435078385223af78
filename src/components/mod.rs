mod input_field;
mod toggle_switch;

pub use input_field::InputField;
pub use toggle_switch::ToggleSwitch;
