use crate::constants::SWAP_FEE_RATE;

/// Applies the fixed fee to a user-typed source amount.
///
/// Returns the counter-amount formatted to exactly 8 fractional digits, or
/// `None` when the text doesn't parse as a number strictly greater than
/// zero. Pure; the result matches a plain IEEE-754 double computation.
pub fn fee_adjusted_amount(source: &str) -> Option<String> {
    let amount: f64 = source.trim().parse().ok()?;
    (amount > 0.0).then(|| format!("{:.8}", amount * (1.0 - SWAP_FEE_RATE)))
}

/// Which field an edit is aimed at. Only the source field is writable.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AmountField {
    Source,
    Destination,
}

/// The two displayed amounts. The destination is never set independently;
/// it is always recomputed from the source through [`fee_adjusted_amount`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AmountState {
    pub source: Option<String>,
    pub destination: Option<String>,
}

impl AmountState {
    /// The single mutation entry point: replaces the whole state from a
    /// source-field edit. The raw text is stored verbatim so partial input
    /// like "." or "0" doesn't clobber the field while the user types.
    pub fn edit_source(text: impl Into<String>) -> Self {
        let text = text.into();
        let destination = fee_adjusted_amount(&text);
        Self {
            source: Some(text),
            destination,
        }
    }
}

/// Routes a field edit into a new state. Edits aimed at the read-only
/// destination field are ignored and return the state unchanged.
pub fn apply_edit(current: &AmountState, field: AmountField, text: impl Into<String>) -> AmountState {
    match field {
        AmountField::Source => AmountState::edit_source(text),
        AmountField::Destination => current.clone(),
    }
}
