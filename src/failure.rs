//! Failure types for tabletop command handling.
//!
//! This module provides the raiseable half of the taxonomy: [`DomainFailure`]
//! with one variant per leaf kind, constructor functions that log on
//! construction, and identity accessors for kind- and category-level
//! dispatch.
//!
//! # Failure Kinds
//!
//! The main type is [`DomainFailure`], which covers every user-visible
//! failure a command handler can raise:
//! - Character state failures (no active character, outdated sheet)
//! - Consumable counter failures (unknown counter, out-of-bounds value)
//! - Selection prompt failures (no options, timeout)
//! - Import client failures (login, insert)
//! - Combat state failures (no combat, channel conflicts)
//!
//! # Handling Example
//!
//! ```rust,no_run
//! use tablemind_errors::{DomainFailure, FailureCategory};
//!
//! fn handle_failure(err: DomainFailure) {
//!     // Category-level dispatch without enumerating leaf kinds
//!     match err.category() {
//!         Some(FailureCategory::Consumable) => {
//!             println!("Counter problem: {}", err);
//!         }
//!         Some(FailureCategory::ExternalClient) => {
//!             println!("Import service problem, try again later");
//!         }
//!         _ => {
//!             // Root-level backstop: every failure renders as-is
//!             println!("{}", err);
//!         }
//!     }
//! }
//! ```
//!
//! # Result Type
//!
//! Use [`DomainResult<T>`] as a convenient alias for
//! `Result<T, DomainFailure>`:
//!
//! ```rust
//! use tablemind_errors::{DomainFailure, DomainResult};
//!
//! fn save_bonus(save_type: &str) -> DomainResult<i32> {
//!     match save_type {
//!         "str" | "dex" | "con" | "int" | "wis" | "cha" => Ok(2),
//!         _ => Err(DomainFailure::invalid_save_type()),
//!     }
//! }
//! ```

use crate::kind::{FailureCategory, FailureKind};
use crate::logging::{log_debug, log_error, log_warn};
use thiserror::Error;

/// Convenient result type for fallible command paths.
///
/// Alias for `Result<T, DomainFailure>`. Use this throughout command
/// handlers and subsystems so failures propagate with `?` until the
/// presentation boundary renders them.
pub type DomainResult<T> = std::result::Result<T, DomainFailure>;

/// A user-renderable failure raised by a command subsystem.
///
/// Every variant carries a complete, non-empty message: `Display` yields
/// exactly the text the presentation boundary shows the user, so callers
/// never assemble display strings themselves. Values are immutable once
/// constructed and propagate untouched through intermediate layers.
///
/// # Creating Failures
///
/// Use the constructor functions, which log at an appropriate level and
/// enforce each kind's message contract:
///
/// ```rust
/// use tablemind_errors::DomainFailure;
///
/// let err = DomainFailure::no_character();
/// assert_eq!(err.to_string(), "You have no character active.");
///
/// // Required caller-supplied message, rendered verbatim
/// let err = DomainFailure::invalid_argument("Expected a number.");
/// assert_eq!(err.to_string(), "Expected a number.");
///
/// // Optional override, falling back to the default
/// let err = DomainFailure::outdated_sheet(None);
/// assert!(err.to_string().starts_with("This command requires"));
/// ```
///
/// # Kind Reference
///
/// | Variant | Category | Message override |
/// |---------|----------|------------------|
/// | `NoCharacter` | root | no |
/// | `NoActiveBrew` | root | no |
/// | `ExternalImportError` | root | required |
/// | `InvalidArgument` | root | required |
/// | `EvaluationError` | root | no (template) |
/// | `FunctionRequiresCharacter` | root | optional |
/// | `OutdatedSheet` | root | optional |
/// | `NoSpellDC` | root | no |
/// | `NoSpellAB` | root | no |
/// | `InvalidSaveType` | root | no |
/// | `ConsumableNotFound` | Consumable | no |
/// | `CounterOutOfBounds` | Consumable | no |
/// | `NoReset` | Consumable | no |
/// | `InvalidSpellLevel` | Consumable | no |
/// | `NoSelectionElements` | Selection | optional |
/// | `SelectionCancelled` | Selection | no |
/// | `LoginFailure` | ExternalClient | no |
/// | `InsertFailure` | ExternalClient | no (template) |
/// | `CombatNotFound` | Combat | no |
/// | `RequiresContext` | Combat | no |
/// | `ChannelInCombat` | Combat | no |
/// | `CombatChannelNotFound` | Combat | no |
/// | `NoCombatants` | Combat | no |
#[derive(Error, Debug)]
pub enum DomainFailure {
    /// The invoking user has no active character.
    ///
    /// Raised by any command that needs a character before it can do
    /// anything at all.
    #[error("You have no character active.")]
    NoCharacter,

    /// The invoking user has no active homebrew content of the needed type.
    #[error("You have no homebrew of this type active.")]
    NoActiveBrew,

    /// An external sheet service rejected or mangled an import.
    ///
    /// The message is caller-supplied because only the import code knows
    /// what the upstream data actually looked like.
    #[error("{message}")]
    ExternalImportError {
        /// Description of what the external sheet got wrong.
        message: String,
    },

    /// A command argument failed validation.
    ///
    /// The message is caller-supplied and should name the argument and
    /// what was expected of it.
    #[error("{message}")]
    InvalidArgument {
        /// Description of the rejected argument.
        message: String,
    },

    /// An expression inside an alias or snippet failed to evaluate.
    ///
    /// Carries the string form of the underlying evaluation fault,
    /// rendered into a fixed prefix with no truncation.
    #[error("Error evaluating expression: {original}")]
    EvaluationError {
        /// String form of the original evaluation fault.
        original: String,
    },

    /// An alias function was invoked without the active character it needs.
    #[error("{message}")]
    FunctionRequiresCharacter {
        /// Custom explanation, or the stock one when the caller has
        /// nothing more specific to say.
        message: String,
    },

    /// The active character's sheet predates a required schema migration.
    #[error("{message}")]
    OutdatedSheet {
        /// Custom explanation, or the stock re-import hint.
        message: String,
    },

    /// The active character has no spell save DC to roll against.
    #[error("No spell save DC found.")]
    NoSpellDC,

    /// The active character has no spell attack bonus to roll with.
    #[error("No spell attack bonus found.")]
    NoSpellAB,

    /// The named saving throw type does not exist.
    #[error("Invalid save type.")]
    InvalidSaveType,

    /// The named consumable counter does not exist on the character.
    #[error("The requested counter does not exist.")]
    ConsumableNotFound,

    /// A counter update would land outside the counter's allowed range.
    #[error("The new value is out of bounds.")]
    CounterOutOfBounds,

    /// A counter reset was requested but the counter defines no reset value.
    #[error("The counter does not have a reset value.")]
    NoReset,

    /// The requested spell slot level does not exist.
    #[error("The spell level is invalid.")]
    InvalidSpellLevel,

    /// A selection prompt was opened with nothing to choose from.
    #[error("{message}")]
    NoSelectionElements {
        /// Custom explanation, or the stock empty-prompt message.
        message: String,
    },

    /// The user never picked an option before the wait expired.
    ///
    /// The waiting subsystem owns the timeout; this value only records
    /// the outcome.
    #[error("Selection timed out or was cancelled.")]
    SelectionCancelled,

    /// The import client could not authenticate with the sheet service.
    ///
    /// The underlying transport error is logged at construction but
    /// deliberately kept out of the user-facing message.
    #[error("Failed to login.")]
    LoginFailure,

    /// The import client could not store a record.
    ///
    /// Carries the string form of the underlying storage fault, rendered
    /// into a fixed prefix with no truncation.
    #[error("Failed to insert: {error}")]
    InsertFailure {
        /// String form of the original storage fault.
        error: String,
    },

    /// The channel has no combat running.
    #[error("This channel is not in combat.")]
    CombatNotFound,

    /// A combat operation ran without its channel context attached.
    #[error("Combat not contextualized.")]
    RequiresContext,

    /// Combat was started in a channel that already has one.
    #[error("Channel already in combat.")]
    ChannelInCombat,

    /// A combat references a channel that no longer exists.
    #[error("Combat channel does not exist.")]
    CombatChannelNotFound,

    /// A combat operation needs combatants and the combat has none.
    #[error("There are no combatants.")]
    NoCombatants,
}

impl DomainFailure {
    /// Get this failure's payload-free identity tag.
    ///
    /// Use this when the dispatch layer wants to key behavior off the
    /// exact kind (custom reply formats, analytics tags) without matching
    /// on payload fields.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tablemind_errors::{DomainFailure, FailureKind};
    ///
    /// let err = DomainFailure::insert_failure("duplicate key");
    /// assert_eq!(err.kind(), FailureKind::InsertFailure);
    /// ```
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::NoCharacter => FailureKind::NoCharacter,
            Self::NoActiveBrew => FailureKind::NoActiveBrew,
            Self::ExternalImportError { .. } => FailureKind::ExternalImportError,
            Self::InvalidArgument { .. } => FailureKind::InvalidArgument,
            Self::EvaluationError { .. } => FailureKind::EvaluationError,
            Self::FunctionRequiresCharacter { .. } => FailureKind::FunctionRequiresCharacter,
            Self::OutdatedSheet { .. } => FailureKind::OutdatedSheet,
            Self::NoSpellDC => FailureKind::NoSpellDC,
            Self::NoSpellAB => FailureKind::NoSpellAB,
            Self::InvalidSaveType => FailureKind::InvalidSaveType,
            Self::ConsumableNotFound => FailureKind::ConsumableNotFound,
            Self::CounterOutOfBounds => FailureKind::CounterOutOfBounds,
            Self::NoReset => FailureKind::NoReset,
            Self::InvalidSpellLevel => FailureKind::InvalidSpellLevel,
            Self::NoSelectionElements { .. } => FailureKind::NoSelectionElements,
            Self::SelectionCancelled => FailureKind::SelectionCancelled,
            Self::LoginFailure => FailureKind::LoginFailure,
            Self::InsertFailure { .. } => FailureKind::InsertFailure,
            Self::CombatNotFound => FailureKind::CombatNotFound,
            Self::RequiresContext => FailureKind::RequiresContext,
            Self::ChannelInCombat => FailureKind::ChannelInCombat,
            Self::CombatChannelNotFound => FailureKind::CombatChannelNotFound,
            Self::NoCombatants => FailureKind::NoCombatants,
        }
    }

    /// Get the grouping this failure belongs to, for category-level handling.
    ///
    /// Returns `None` for kinds that attach directly to the root contract.
    /// Membership is defined once on [`FailureKind::category`]; this is a
    /// convenience that routes through [`kind()`](Self::kind).
    ///
    /// # Example
    ///
    /// ```rust
    /// use tablemind_errors::{DomainFailure, FailureCategory};
    ///
    /// let err = DomainFailure::counter_out_of_bounds();
    /// assert_eq!(err.category(), Some(FailureCategory::Consumable));
    ///
    /// let err = DomainFailure::no_character();
    /// assert_eq!(err.category(), None);
    /// ```
    pub fn category(&self) -> Option<FailureCategory> {
        self.kind().category()
    }

    // =========================================================================
    // Constructor functions with automatic logging
    // =========================================================================
    //
    // These functions log the failure at an appropriate level and enforce
    // each kind's message contract. Use them instead of constructing
    // variants directly.

    /// Create a no-active-character failure (logs at DEBUG level).
    pub fn no_character() -> Self {
        log_debug!(error_type = "no_character", "No active character for command");
        Self::NoCharacter
    }

    pub fn no_active_brew() -> Self {
        log_debug!(
            error_type = "no_active_brew",
            "No active homebrew of the requested type"
        );
        Self::NoActiveBrew
    }

    /// Create an external import failure with a required caller message.
    ///
    /// The message renders verbatim, so it must describe the upstream
    /// problem in user-readable terms. Supplying an empty message is a
    /// caller bug and trips a debug-build trap.
    pub fn external_import_error(message: impl Into<String>) -> Self {
        let message = message.into();
        debug_assert!(
            !message.is_empty(),
            "external import failures must carry a message"
        );
        log_warn!(
            error_type = "external_import_error",
            message = %message,
            "Character sheet import rejected"
        );
        Self::ExternalImportError { message }
    }

    /// Create an invalid-argument failure with a required caller message.
    ///
    /// The message renders verbatim. Supplying an empty message is a
    /// caller bug and trips a debug-build trap.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        let message = message.into();
        debug_assert!(
            !message.is_empty(),
            "argument rejections must say what was expected"
        );
        log_debug!(
            error_type = "invalid_argument",
            message = %message,
            "Command argument rejected"
        );
        Self::InvalidArgument { message }
    }

    /// Create an expression-evaluation failure from the underlying fault.
    ///
    /// `original` is captured via its `Display` form and rendered into the
    /// message template unmodified; empty and multi-line forms pass
    /// through as-is.
    pub fn evaluation_error(original: impl std::fmt::Display) -> Self {
        let original = original.to_string();
        log_warn!(
            error_type = "evaluation_error",
            original = %original,
            "Alias expression evaluation failed"
        );
        Self::EvaluationError { original }
    }

    /// Create an alias-needs-character failure, with an optional override.
    pub fn function_requires_character(message: Option<String>) -> Self {
        let message =
            message.unwrap_or_else(|| "This alias requires an active character.".to_string());
        debug_assert!(!message.is_empty(), "override text must not be empty");
        log_debug!(
            error_type = "function_requires_character",
            message = %message,
            "Alias function invoked without a character"
        );
        Self::FunctionRequiresCharacter { message }
    }

    /// Create an outdated-sheet failure, with an optional override.
    pub fn outdated_sheet(message: Option<String>) -> Self {
        let message = message.unwrap_or_else(|| {
            "This command requires an updated character sheet. Try running the update command."
                .to_string()
        });
        debug_assert!(!message.is_empty(), "override text must not be empty");
        log_warn!(
            error_type = "outdated_sheet",
            message = %message,
            "Character sheet schema is outdated"
        );
        Self::OutdatedSheet { message }
    }

    pub fn no_spell_dc() -> Self {
        log_debug!(error_type = "no_spell_dc", "Character has no spell save DC");
        Self::NoSpellDC
    }

    pub fn no_spell_ab() -> Self {
        log_debug!(
            error_type = "no_spell_ab",
            "Character has no spell attack bonus"
        );
        Self::NoSpellAB
    }

    pub fn invalid_save_type() -> Self {
        log_debug!(error_type = "invalid_save_type", "Unrecognized save type");
        Self::InvalidSaveType
    }

    pub fn consumable_not_found() -> Self {
        log_debug!(
            error_type = "consumable_not_found",
            "Requested counter does not exist"
        );
        Self::ConsumableNotFound
    }

    pub fn counter_out_of_bounds() -> Self {
        log_debug!(
            error_type = "counter_out_of_bounds",
            "Counter value rejected as out of bounds"
        );
        Self::CounterOutOfBounds
    }

    pub fn no_reset() -> Self {
        log_debug!(error_type = "no_reset", "Counter defines no reset value");
        Self::NoReset
    }

    pub fn invalid_spell_level() -> Self {
        log_debug!(error_type = "invalid_spell_level", "Spell level rejected");
        Self::InvalidSpellLevel
    }

    /// Create an empty-selection failure, with an optional override.
    pub fn no_selection_elements(message: Option<String>) -> Self {
        let message =
            message.unwrap_or_else(|| "There are no choices to select from.".to_string());
        debug_assert!(!message.is_empty(), "override text must not be empty");
        log_debug!(
            error_type = "no_selection_elements",
            message = %message,
            "Selection prompt opened with no options"
        );
        Self::NoSelectionElements { message }
    }

    pub fn selection_cancelled() -> Self {
        log_debug!(
            error_type = "selection_cancelled",
            "Selection wait expired or was cancelled"
        );
        Self::SelectionCancelled
    }

    /// Create a login failure (logs at ERROR level).
    ///
    /// The fixed message keeps credentials and transport detail away from
    /// the user; log the underlying cause at the call site before
    /// constructing this.
    pub fn login_failure() -> Self {
        log_error!(error_type = "login_failure", "Import client login failed");
        Self::LoginFailure
    }

    /// Create an insert failure from the underlying storage fault.
    ///
    /// `error` is captured via its `Display` form and rendered into the
    /// message template unmodified.
    pub fn insert_failure(error: impl std::fmt::Display) -> Self {
        let error = error.to_string();
        log_error!(
            error_type = "insert_failure",
            cause = %error,
            "Import client insert failed"
        );
        Self::InsertFailure { error }
    }

    pub fn combat_not_found() -> Self {
        log_debug!(error_type = "combat_not_found", "Channel has no combat");
        Self::CombatNotFound
    }

    pub fn requires_context() -> Self {
        log_debug!(
            error_type = "requires_context",
            "Combat operation ran without channel context"
        );
        Self::RequiresContext
    }

    pub fn channel_in_combat() -> Self {
        log_debug!(
            error_type = "channel_in_combat",
            "Channel already has a combat running"
        );
        Self::ChannelInCombat
    }

    pub fn combat_channel_not_found() -> Self {
        log_debug!(
            error_type = "combat_channel_not_found",
            "Combat references a missing channel"
        );
        Self::CombatChannelNotFound
    }

    pub fn no_combatants() -> Self {
        log_debug!(error_type = "no_combatants", "Combat has no combatants");
        Self::NoCombatants
    }
}
