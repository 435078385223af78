use super::{AmountState, Direction};
use crate::constants::{ASSET_PAIR, BTC_DECIMALS};
use crate::utils::parse_base_units;
use garden_client::Asset;
use serde::Serialize;

/// Validates an amount string before submission.
pub type AmountPredicate = fn(&str) -> bool;

/// The reference implementation's numeric guard, reproduced as-is: it
/// accepts every string, including empty and non-numeric text, so a cleared
/// or garbage amount scales to 0 base units instead of blocking the call.
/// Known-weak; swap in [`finite_positive_amount`] for a strict gate.
pub fn permissive_amount(_amount: &str) -> bool {
    true
}

/// Strict variant: the text must parse as a finite number greater than zero.
pub fn finite_positive_amount(amount: &str) -> bool {
    amount
        .trim()
        .parse::<f64>()
        .map(|value| value.is_finite() && value > 0.0)
        .unwrap_or(false)
}

/// Everything the orderbook call needs, assembled from the displayed
/// amounts and the direction at the moment of submission.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SwapParams {
    pub send_asset: Asset,
    pub receive_asset: Asset,
    pub send_amount: u64,
    pub receive_amount: u64,
}

/// Assembles the submission, or `None` when preconditions fail (no swap
/// service installed, or an amount rejected by the predicate). A `None` is
/// a silent no-op: the caller must not clear state or dispatch anything.
///
/// The source field always holds the WBTC amount and the destination field
/// the BTC amount; direction only decides which (asset, amount) pair takes
/// the send role.
pub fn plan_submission(
    amounts: &AmountState,
    direction: Direction,
    has_swap_service: bool,
    amount_ok: AmountPredicate,
) -> Option<SwapParams> {
    if !has_swap_service {
        return None;
    }

    let source = amounts.source.as_deref().unwrap_or("");
    let destination = amounts.destination.as_deref().unwrap_or("");
    if !amount_ok(source) || !amount_ok(destination) {
        return None;
    }

    let source_units = parse_base_units(source, BTC_DECIMALS);
    let destination_units = parse_base_units(destination, BTC_DECIMALS);

    let params = match direction {
        Direction::WbtcToBtc => SwapParams {
            send_asset: ASSET_PAIR.wbtc,
            receive_asset: ASSET_PAIR.btc,
            send_amount: source_units,
            receive_amount: destination_units,
        },
        Direction::BtcToWbtc => SwapParams {
            send_asset: ASSET_PAIR.btc,
            receive_asset: ASSET_PAIR.wbtc,
            send_amount: destination_units,
            receive_amount: source_units,
        },
    };

    Some(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_swap_service_is_a_noop() {
        let amounts = AmountState::edit_source("2");
        assert_eq!(
            plan_submission(&amounts, Direction::WbtcToBtc, false, permissive_amount),
            None
        );
    }

    #[test]
    fn wbtc_to_btc_sends_the_wrapped_token() {
        let amounts = AmountState::edit_source("2");
        let params =
            plan_submission(&amounts, Direction::WbtcToBtc, true, permissive_amount).unwrap();

        assert_eq!(params.send_asset, ASSET_PAIR.wbtc);
        assert_eq!(params.receive_asset, ASSET_PAIR.btc);
        assert_eq!(params.send_amount, 200_000_000);
        assert_eq!(params.receive_amount, 199_400_000);
    }

    #[test]
    fn btc_to_wbtc_inverts_roles_but_not_field_meaning() {
        let amounts = AmountState::edit_source("2");
        let params =
            plan_submission(&amounts, Direction::BtcToWbtc, true, permissive_amount).unwrap();

        // The WBTC amount still comes from the source field; it just takes
        // the receive role now.
        assert_eq!(params.send_asset, ASSET_PAIR.btc);
        assert_eq!(params.receive_asset, ASSET_PAIR.wbtc);
        assert_eq!(params.send_amount, 199_400_000);
        assert_eq!(params.receive_amount, 200_000_000);
    }

    #[test]
    fn toggling_leaves_displayed_amounts_untouched() {
        let amounts = AmountState::edit_source("2");
        assert_eq!(amounts.destination.as_deref(), Some("1.99400000"));

        let direction = Direction::default().toggled();
        // The state carries the same strings into the submission either way.
        assert_eq!(amounts.destination.as_deref(), Some("1.99400000"));

        let params = plan_submission(&amounts, direction, true, permissive_amount).unwrap();
        assert_eq!(params.send_amount, 199_400_000);
    }

    #[test]
    fn permissive_guard_lets_cleared_amounts_through_as_zero() {
        // The reproduced reference behavior: a second submission after the
        // optimistic clear would fire with zeroed amounts.
        let params = plan_submission(
            &AmountState::default(),
            Direction::WbtcToBtc,
            true,
            permissive_amount,
        )
        .unwrap();

        assert_eq!(params.send_amount, 0);
        assert_eq!(params.receive_amount, 0);
    }

    #[test]
    fn strict_guard_blocks_cleared_and_garbage_amounts() {
        assert_eq!(
            plan_submission(
                &AmountState::default(),
                Direction::WbtcToBtc,
                true,
                finite_positive_amount,
            ),
            None
        );
        assert_eq!(
            plan_submission(
                &AmountState::edit_source("abc"),
                Direction::WbtcToBtc,
                true,
                finite_positive_amount,
            ),
            None
        );
        assert!(plan_submission(
            &AmountState::edit_source("2"),
            Direction::WbtcToBtc,
            true,
            finite_positive_amount,
        )
        .is_some());
    }

    #[test]
    fn exponent_form_source_scales_consistently_on_both_sides() {
        // type="number" inputs accept exponent notation; both submission
        // amounts must come out of the same numeric interpretation.
        let amounts = AmountState::edit_source("1e5");
        assert_eq!(amounts.destination.as_deref(), Some("99700.00000000"));

        let params =
            plan_submission(&amounts, Direction::WbtcToBtc, true, permissive_amount).unwrap();
        assert_eq!(params.send_amount, 10_000_000_000_000);
        assert_eq!(params.receive_amount, 9_970_000_000_000);
    }

    #[test]
    fn oversized_source_amounts_saturate_the_submission() {
        let amounts = AmountState::edit_source("200000000000");
        let params =
            plan_submission(&amounts, Direction::WbtcToBtc, true, permissive_amount).unwrap();

        assert_eq!(params.send_amount, u64::MAX);
        assert_eq!(params.receive_amount, u64::MAX);
    }

    #[test]
    fn end_to_end_entry_toggle_submit() {
        // Start empty, type "2", check the derived amount, toggle twice
        // (back to the default direction), submit.
        let mut amounts = AmountState::default();
        assert_eq!(amounts, AmountState::default());

        amounts = AmountState::edit_source("2");
        assert_eq!(amounts.destination.as_deref(), Some("1.99400000"));

        let direction = Direction::default().toggled().toggled();
        assert_eq!(direction, Direction::WbtcToBtc);

        let params = plan_submission(&amounts, direction, true, permissive_amount).unwrap();
        assert_eq!(
            params,
            SwapParams {
                send_asset: ASSET_PAIR.wbtc,
                receive_asset: ASSET_PAIR.btc,
                send_amount: 200_000_000,
                receive_amount: 199_400_000,
            }
        );

        // The submit handler clears optimistically before the call resolves.
        amounts = AmountState::default();
        assert_eq!(amounts.source, None);
        assert_eq!(amounts.destination, None);
    }
}
