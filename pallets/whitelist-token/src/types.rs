use sp_runtime::RuntimeDebug;

/// Amount type for balances, allowances and supply.
pub type Balance = sp_core::U256;

/// ERC-1404 transfer restriction codes.
///
/// Evaluated in the same order `transfer` checks its preconditions, so the
/// code returned for a given `(from, to, amount)` always names the error the
/// transfer itself would fail with.
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
#[repr(u8)]
pub enum RestrictionCode {
    Success = 0,
    RecipientNotWhitelisted = 1,
    SenderNotWhitelisted = 2,
    InsufficientBalance = 3,
}

/// Message returned for codes no variant maps to.
pub const UNKNOWN_RESTRICTION_MESSAGE: &str = "UNKNOWN_RESTRICTION_CODE";

impl RestrictionCode {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::RecipientNotWhitelisted => "RECIPIENT_NOT_WHITELISTED",
            Self::SenderNotWhitelisted => "SENDER_NOT_WHITELISTED",
            Self::InsufficientBalance => "INSUFFICIENT_BALANCE",
        }
    }

    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

impl TryFrom<u8> for RestrictionCode {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Success),
            1 => Ok(Self::RecipientNotWhitelisted),
            2 => Ok(Self::SenderNotWhitelisted),
            3 => Ok(Self::InsufficientBalance),
            other => Err(other),
        }
    }
}
