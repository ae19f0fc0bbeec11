//! Split-bill form
//!
//! Amounts are kept as the text the user typed. Every edit is parsed before
//! it is accepted, so the stored text always parses. The friend's share is
//! derived on each read.

use anyhow::{bail, Result};

use crate::models::{FriendId, Payer};
use crate::store::FriendStore;

/// Parse an amount field.
///
/// Empty text and a bare sign or decimal point are "not entered yet".
pub fn parse_amount(text: &str) -> Result<Option<f64>> {
    let text = text.trim();
    if matches!(text, "" | "-" | "." | "-.") {
        return Ok(None);
    }

    let value: f64 = text.parse()?;
    if !value.is_finite() {
        bail!("amount must be finite: {}", text);
    }
    Ok(Some(value))
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SplitBillForm {
    bill_input: String,
    paid_by_user_input: String,
    pub payer: Payer,
}

impl SplitBillForm {
    pub fn bill_input(&self) -> &str {
        &self.bill_input
    }

    pub fn paid_by_user_input(&self) -> &str {
        &self.paid_by_user_input
    }

    pub fn bill_total(&self) -> Option<f64> {
        parse_amount(&self.bill_input).ok().flatten()
    }

    pub fn paid_by_user(&self) -> Option<f64> {
        parse_amount(&self.paid_by_user_input).ok().flatten()
    }

    /// Bill minus the user's share; unset until a non-zero bill is entered
    pub fn paid_by_friend(&self) -> Option<f64> {
        self.bill_total()
            .filter(|bill| *bill != 0.0)
            .map(|bill| bill - self.paid_by_user().unwrap_or(0.0))
    }

    /// Replace the bill text. Returns false (and keeps the old text) if it doesn't parse.
    pub fn set_bill_input(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if parse_amount(&text).is_err() {
            return false;
        }
        self.bill_input = text;
        true
    }

    /// Replace the user's share. Rejected if it doesn't parse or exceeds the bill.
    ///
    /// With no bill entered the limit is zero.
    pub fn set_paid_by_user_input(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        let value = match parse_amount(&text) {
            Ok(value) => value,
            Err(_) => return false,
        };

        if let Some(value) = value {
            if value > self.bill_total().unwrap_or(0.0) {
                tracing::debug!(value, "Expense above bill rejected");
                return false;
            }
        }
        self.paid_by_user_input = text;
        true
    }

    pub fn cycle_payer(&mut self) {
        self.payer = self.payer.next();
    }

    /// Signed balance change for the friend, or `None` while the bill or the
    /// user's share is missing or zero
    pub fn delta(&self) -> Option<f64> {
        let bill = self.bill_total().filter(|bill| *bill != 0.0)?;
        let paid_by_user = self.paid_by_user().filter(|paid| *paid != 0.0)?;

        Some(match self.payer {
            Payer::User => bill - paid_by_user,
            Payer::Friend => -paid_by_user,
        })
    }

    /// Apply the split to `friend`. Returns false when inputs are incomplete.
    pub fn submit(&self, friend: &FriendId, store: &mut FriendStore) -> bool {
        match self.delta() {
            Some(delta) => {
                store.update_balance(friend, delta);
                true
            }
            None => {
                tracing::debug!(%friend, "Split bill ignored: missing amounts");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Friend;

    fn form(bill: &str, paid: &str, payer: Payer) -> SplitBillForm {
        let mut form = SplitBillForm::default();
        assert!(form.set_bill_input(bill));
        assert!(form.set_paid_by_user_input(paid));
        form.payer = payer;
        form
    }

    fn store() -> FriendStore {
        FriendStore::with_friends(vec![Friend::new(FriendId::new("2"), "Aadya", "img", 0.0)])
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("").unwrap(), None);
        assert_eq!(parse_amount("-").unwrap(), None);
        assert_eq!(parse_amount("12.5").unwrap(), Some(12.5));
        assert_eq!(parse_amount("-3").unwrap(), Some(-3.0));
        assert!(parse_amount("12a").is_err());
        assert!(parse_amount("inf").is_err());
        assert!(parse_amount("NaN").is_err());
    }

    #[test]
    fn test_paid_by_friend_is_derived() {
        let mut form = SplitBillForm::default();
        assert_eq!(form.paid_by_friend(), None);

        form.set_bill_input("100");
        assert_eq!(form.paid_by_friend(), Some(100.0));

        form.set_paid_by_user_input("40");
        assert_eq!(form.paid_by_friend(), Some(60.0));

        form.set_bill_input("90");
        assert_eq!(form.paid_by_friend(), Some(50.0));
    }

    #[test]
    fn test_user_pays_friend_owes_their_share() {
        let form = form("100", "40", Payer::User);
        assert_eq!(form.paid_by_friend(), Some(60.0));
        assert_eq!(form.delta(), Some(60.0));

        let mut store = store();
        assert!(form.submit(&FriendId::new("2"), &mut store));
        assert_eq!(store.list()[0].balance, 60.0);
    }

    #[test]
    fn test_friend_pays_user_owes_their_share() {
        let form = form("100", "40", Payer::Friend);
        assert_eq!(form.delta(), Some(-40.0));

        let mut store = store();
        assert!(form.submit(&FriendId::new("2"), &mut store));
        assert_eq!(store.list()[0].balance, -40.0);
    }

    #[test]
    fn test_expense_above_bill_is_rejected() {
        let mut form = form("100", "40", Payer::User);
        assert!(!form.set_paid_by_user_input("150"));
        assert_eq!(form.paid_by_user_input(), "40");
        assert_eq!(form.paid_by_user(), Some(40.0));

        assert!(form.set_paid_by_user_input("100"));
        assert_eq!(form.paid_by_user(), Some(100.0));
    }

    #[test]
    fn test_expense_without_bill_is_rejected() {
        let mut form = SplitBillForm::default();
        assert!(!form.set_paid_by_user_input("5"));
        assert!(form.set_paid_by_user_input("0"));
        assert_eq!(form.paid_by_user(), Some(0.0));
    }

    #[test]
    fn test_lowering_bill_does_not_clamp_expense() {
        let mut form = form("100", "80", Payer::User);
        assert!(form.set_bill_input("50"));
        assert_eq!(form.paid_by_user(), Some(80.0));
        assert_eq!(form.paid_by_friend(), Some(-30.0));
    }

    #[test]
    fn test_non_numeric_input_is_rejected() {
        let mut form = form("10", "", Payer::User);
        assert!(!form.set_bill_input("10x"));
        assert_eq!(form.bill_input(), "10");
        assert!(!form.set_paid_by_user_input("abc"));
        assert_eq!(form.paid_by_user_input(), "");
    }

    #[test]
    fn test_submit_requires_bill_and_expense() {
        let mut store = store();
        let id = FriendId::new("2");

        assert!(!SplitBillForm::default().submit(&id, &mut store));
        assert!(!form("100", "", Payer::User).submit(&id, &mut store));
        assert!(!form("0", "0", Payer::Friend).submit(&id, &mut store));
        assert_eq!(store.list()[0].balance, 0.0);
    }

    #[test]
    fn test_zero_expense_blocks_submit() {
        let form = form("100", "0", Payer::User);
        assert_eq!(form.delta(), None);

        let mut store = store();
        assert!(!form.submit(&FriendId::new("2"), &mut store));
        assert_eq!(store.list()[0].balance, 0.0);
    }

    #[test]
    fn test_zero_bill_leaves_friend_share_blank() {
        let mut form = SplitBillForm::default();
        assert!(form.set_bill_input("0"));
        assert_eq!(form.paid_by_friend(), None);

        assert!(form.set_bill_input("0.5"));
        assert_eq!(form.paid_by_friend(), Some(0.5));
    }

    #[test]
    fn test_negative_bill_is_accepted() {
        let form = form("-20", "-30", Payer::User);
        assert_eq!(form.delta(), Some(10.0));
    }
}
