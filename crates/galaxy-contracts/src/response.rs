//! Wire-shaped operation responses.
//!
//! The embedding protocol represents every operation outcome as a tagged
//! two-variant union: `{"ok": value}` on success or `{"err": code}` on
//! failure -- never both, never neither. [`ContractResponse`] is that shape
//! with serde derives, for hosts that relay results over a transport.
//! Inside the workspace, operations use [`ContractResult`] directly.

use serde::{Deserialize, Serialize};

use crate::error::{ContractError, ContractResult};

/// A wire-shaped operation outcome: success payload or numeric error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContractResponse<T> {
    /// The operation succeeded, carrying its payload.
    Ok {
        /// The success value.
        ok: T,
    },
    /// The operation failed with a fixed wire code.
    Err {
        /// The numeric error code (404, 403, 400, or 500).
        err: u16,
    },
}

impl<T> ContractResponse<T> {
    /// Return the success payload, if this is the success variant.
    pub fn into_ok(self) -> Option<T> {
        match self {
            Self::Ok { ok } => Some(ok),
            Self::Err { .. } => None,
        }
    }

    /// Return the error code, if this is the failure variant.
    pub const fn err_code(&self) -> Option<u16> {
        match self {
            Self::Ok { .. } => None,
            Self::Err { err } => Some(*err),
        }
    }
}

impl ContractResponse<bool> {
    /// Wrap a value-less mutation outcome as `{"ok": true}` / `{"err": code}`.
    ///
    /// The wire protocol acknowledges successful updates, transfers,
    /// purchases, and cancels with a literal `true`, not a null payload.
    pub fn acknowledged(result: ContractResult<()>) -> Self {
        Self::from(result.map(|()| true))
    }
}

impl<T> From<ContractResult<T>> for ContractResponse<T> {
    fn from(result: ContractResult<T>) -> Self {
        match result {
            Ok(ok) => Self::Ok { ok },
            Err(err) => Self::Err { err: err.code() },
        }
    }
}

impl<T> From<ContractError> for ContractResponse<T> {
    fn from(err: ContractError) -> Self {
        Self::Err { err: err.code() }
    }
}
