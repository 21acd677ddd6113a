// ============================================================
// Error messages
// Every failure aborts the whole transaction with one of these.
// ============================================================

// ── Validation ──

pub const INVALID_VOTING_POWER: &str = "InvalidVotingPower";
pub const INVALID_DEADLINE: &str = "InvalidDeadline";
pub const INVALID_TIME_OF_EXECUTION: &str = "InvalidTimeOfExecution";
pub const INVALID_CALLER: &str = "InvalidCaller";
pub const ALREADY_PROPOSED: &str = "AlreadyProposed";
pub const CANNOT_OWN_MORE_THAN_ONE: &str = "CannotOwnMoreThanOne";
pub const INVALID_RECIPIENT: &str = "InvalidRecipient";

// ── State ──

pub const INVALID_PROPOSAL: &str = "InvalidProposal";
pub const INVALID_VOTER: &str = "InvalidVoter";
pub const UNKNOWN_CREDENTIAL: &str = "UnknownCredential";

// ── Configuration ──

pub const INVALID_BOUNDS: &str = "InvalidBounds";
pub const THRESHOLD_OUT_OF_RANGE: &str = "ThresholdOutOfRange";

// ── Access control ──

pub const NOT_ADMINISTRATOR: &str = "NotAdministrator";
