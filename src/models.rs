use serde::{Deserialize, Deserializer};
use std::fmt;

use crate::constants::CURRENCY;

/// Opaque friend identifier
///
/// Seed files may spell ids as integers or strings; both end up as text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FriendId(String);

impl FriendId {
    pub fn new(id: impl Into<String>) -> Self {
        FriendId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FriendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for FriendId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(u64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => FriendId(n.to_string()),
            RawId::Text(s) => FriendId(s),
        })
    }
}

/// A friend with a running balance
///
/// Negative balance: you owe them. Positive: they owe you.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Friend {
    pub id: FriendId,
    pub name: String,
    pub image: String,
    pub balance: f64,
}

impl Friend {
    pub fn new(id: FriendId, name: impl Into<String>, image: impl Into<String>, balance: f64) -> Self {
        Friend {
            id,
            name: name.into(),
            image: image.into(),
            balance,
        }
    }

    pub fn status(&self) -> BalanceStatus {
        BalanceStatus::of(self.balance)
    }

    /// Human readable balance line
    pub fn describe_balance(&self) -> String {
        let amount = format_amount(self.balance.abs());
        match self.status() {
            BalanceStatus::YouOwe => format!("You owe {} {} {}", self.name, CURRENCY, amount),
            BalanceStatus::OwesYou => format!("{} owes you {} {}", self.name, CURRENCY, amount),
            BalanceStatus::Even => format!("You and {} are even.", self.name),
        }
    }
}

/// Who owes whom, derived from the balance sign
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BalanceStatus {
    YouOwe,
    OwesYou,
    Even,
}

impl BalanceStatus {
    pub fn of(balance: f64) -> Self {
        if balance < 0.0 {
            BalanceStatus::YouOwe
        } else if balance > 0.0 {
            BalanceStatus::OwesYou
        } else {
            BalanceStatus::Even
        }
    }
}

/// Who paid the bill
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Payer {
    #[default]
    User,
    Friend,
}

impl Payer {
    pub fn next(&self) -> Payer {
        match self {
            Payer::User => Payer::Friend,
            Payer::Friend => Payer::User,
        }
    }

    /// Label shown in the form; the friend side uses their name
    pub fn label<'a>(&self, friend_name: &'a str) -> &'a str {
        match self {
            Payer::User => "You",
            Payer::Friend => friend_name,
        }
    }
}

/// Formats an amount without a trailing `.0` for whole numbers
pub fn format_amount(amount: f64) -> String {
    format!("{}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn friend(balance: f64) -> Friend {
        Friend::new(FriendId::new("1"), "Krish", "img", balance)
    }

    #[test]
    fn test_balance_status_partition() {
        for (balance, expected) in [
            (-70.0, BalanceStatus::YouOwe),
            (-0.5, BalanceStatus::YouOwe),
            (0.0, BalanceStatus::Even),
            (0.5, BalanceStatus::OwesYou),
            (120.0, BalanceStatus::OwesYou),
        ] {
            assert_eq!(BalanceStatus::of(balance), expected, "balance {}", balance);
        }
    }

    #[test]
    fn test_describe_balance() {
        assert_eq!(friend(-70.0).describe_balance(), "You owe Krish Rs. 70");
        assert_eq!(friend(12.5).describe_balance(), "Krish owes you Rs. 12.5");
        assert_eq!(friend(0.0).describe_balance(), "You and Krish are even.");
    }

    #[test]
    fn test_payer_cycle_and_label() {
        assert_eq!(Payer::default(), Payer::User);
        assert_eq!(Payer::User.next(), Payer::Friend);
        assert_eq!(Payer::Friend.next(), Payer::User);
        assert_eq!(Payer::User.label("Aadya"), "You");
        assert_eq!(Payer::Friend.label("Aadya"), "Aadya");
    }

    #[test]
    fn test_friend_id_from_yaml_number_or_string() {
        let ids: Vec<FriendId> = serde_yaml::from_str("- 499476\n- \"abc-123\"\n").unwrap();
        assert_eq!(ids, vec![FriendId::new("499476"), FriendId::new("abc-123")]);
    }
}
