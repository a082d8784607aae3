//! Failure identity tags: grouping categories and leaf kinds.
//!
//! These are the payload-free half of the taxonomy. [`FailureKind`] names
//! every raiseable failure; [`FailureCategory`] names the four groupings a
//! handler can match on without enumerating members. Category membership is
//! defined once, in [`FailureKind::category`], and everything else in the
//! crate delegates to it.

use serde::{Deserialize, Serialize};

/// Grouping tag for coarse-grained failure handling.
///
/// Categories are purely organizational and are never raised as values. A
/// presentation-boundary handler can match on a category to apply one
/// recovery strategy to every member; see
/// [`ReplyRouter`](crate::boundary::ReplyRouter).
///
/// Leaf kinds that belong to no grouping attach directly to the root
/// contract and report `None` from
/// [`DomainFailure::category`](crate::DomainFailure::category).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureCategory {
    /// Limited-use counters tracked on a character.
    Consumable,

    /// Interactive option prompts awaiting a user pick.
    Selection,

    /// The external sheet-import service.
    ExternalClient,

    /// Combat encounters bound to a channel.
    Combat,
}

impl std::fmt::Display for FailureCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureCategory::Consumable => write!(f, "consumable"),
            FailureCategory::Selection => write!(f, "selection"),
            FailureCategory::ExternalClient => write!(f, "external_client"),
            FailureCategory::Combat => write!(f, "combat"),
        }
    }
}

/// Identity tag for a leaf failure kind, independent of any payload.
///
/// One variant per [`DomainFailure`](crate::DomainFailure) variant, in the
/// same order; see that type for the semantics and message contract of each
/// kind. The dispatch layer reads this through
/// [`DomainFailure::kind`](crate::DomainFailure::kind) when it wants a
/// copyable, serializable identity (for choosing a custom reply format or
/// tagging analytics) without matching on payload fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureKind {
    NoCharacter,
    NoActiveBrew,
    ExternalImportError,
    InvalidArgument,
    EvaluationError,
    FunctionRequiresCharacter,
    OutdatedSheet,
    NoSpellDC,
    NoSpellAB,
    InvalidSaveType,
    ConsumableNotFound,
    CounterOutOfBounds,
    NoReset,
    InvalidSpellLevel,
    NoSelectionElements,
    SelectionCancelled,
    LoginFailure,
    InsertFailure,
    CombatNotFound,
    RequiresContext,
    ChannelInCombat,
    CombatChannelNotFound,
    NoCombatants,
}

impl FailureKind {
    /// The grouping this kind belongs to, or `None` for root-level kinds.
    ///
    /// The match is exhaustive with no wildcard arm, so adding a kind
    /// without placing it in a grouping is a compile error: membership
    /// stays total, and a kind can never sit in two categories.
    pub fn category(self) -> Option<FailureCategory> {
        match self {
            FailureKind::NoCharacter
            | FailureKind::NoActiveBrew
            | FailureKind::ExternalImportError
            | FailureKind::InvalidArgument
            | FailureKind::EvaluationError
            | FailureKind::FunctionRequiresCharacter
            | FailureKind::OutdatedSheet
            | FailureKind::NoSpellDC
            | FailureKind::NoSpellAB
            | FailureKind::InvalidSaveType => None,

            FailureKind::ConsumableNotFound
            | FailureKind::CounterOutOfBounds
            | FailureKind::NoReset
            | FailureKind::InvalidSpellLevel => Some(FailureCategory::Consumable),

            FailureKind::NoSelectionElements | FailureKind::SelectionCancelled => {
                Some(FailureCategory::Selection)
            }

            FailureKind::LoginFailure | FailureKind::InsertFailure => {
                Some(FailureCategory::ExternalClient)
            }

            FailureKind::CombatNotFound
            | FailureKind::RequiresContext
            | FailureKind::ChannelInCombat
            | FailureKind::CombatChannelNotFound
            | FailureKind::NoCombatants => Some(FailureCategory::Combat),
        }
    }
}
