multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Content-addressed proposal identifier (keccak256 of a [`ProposalKey`]).
pub type ProposalId<M> = ManagedByteArray<M, 32>;

// ============================================================
// Proposal Status — derived on every query, never stored
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProposalStatus {
    /// Below threshold, deadline not reached. Votable.
    Active,
    /// Threshold reached, deadline not reached. Votable and executable.
    Passed,
    /// Deadline passed before execution. Terminal.
    Expired,
    /// Dispatched. Terminal.
    Executed,
    /// Disqualified by the administrator. Terminal, wins over everything else.
    Vetoed,
}

impl ProposalStatus {
    pub fn accepts_votes(self) -> bool {
        matches!(self, ProposalStatus::Active | ProposalStatus::Passed)
    }
}

// ============================================================
// Proposal — the stored governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub proposer: ManagedAddress<M>,
    /// Where the action is dispatched.
    pub target: ManagedAddress<M>,
    /// Endpoint called on `target`. Empty means a plain value transfer.
    pub function: ManagedBuffer<M>,
    pub arguments: ManagedVec<M, ManagedBuffer<M>>,
    /// Last block timestamp at which votes are accepted.
    pub deadline: u64,
    /// 0 until executed, then the block timestamp of execution.
    pub execution_time: u64,
    pub vetoed: bool,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn key(&self) -> ProposalKey<M> {
        ProposalKey {
            target: self.target.clone(),
            deadline: self.deadline,
            function: self.function.clone(),
            arguments: self.arguments.clone(),
            proposer: self.proposer.clone(),
        }
    }
}

// ============================================================
// Proposal Key — the immutable fields hashed into the identifier
// ============================================================

/// Field order is part of the identifier format and must not change:
/// target (32 bytes), deadline (u64 BE), function (u32 length + bytes),
/// arguments (u32 count, then u32 length + bytes each), proposer (32 bytes).
#[type_abi]
#[derive(TopEncode, NestedEncode, Clone, PartialEq, Debug)]
pub struct ProposalKey<M: ManagedTypeApi> {
    pub target: ManagedAddress<M>,
    pub deadline: u64,
    pub function: ManagedBuffer<M>,
    pub arguments: ManagedVec<M, ManagedBuffer<M>>,
    pub proposer: ManagedAddress<M>,
}
