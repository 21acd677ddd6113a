#![no_std]

multiversx_sc::imports!();

pub mod admin;
pub mod errors;
pub mod membership;
pub mod types;

use errors::{
    ALREADY_PROPOSED, INVALID_CALLER, INVALID_DEADLINE, INVALID_PROPOSAL,
    INVALID_TIME_OF_EXECUTION, INVALID_VOTER, INVALID_VOTING_POWER, THRESHOLD_OUT_OF_RANGE,
};
use multiversx_sc::contract_base::ManagedSerializer;
use types::{Proposal, ProposalId, ProposalStatus};

// ============================================================
// Constants
// ============================================================

/// Lowest configurable threshold: 1% (basis points)
const MIN_VOTES_THRESHOLD_FLOOR: u64 = 100;

/// Basis points denominator, also the highest threshold (100%)
const BPS_DENOMINATOR: u64 = 10_000;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait MembershipDao: admin::AdminModule + membership::MembershipModule {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        min_voting_power: BigUint,
        max_voting_power: BigUint,
        max_total_voting_power: BigUint,
        min_votes_threshold: u64,
    ) {
        self.administrator().set(self.blockchain().get_caller());
        self.init_membership(min_voting_power, max_voting_power, max_total_voting_power);

        self.require_valid_threshold(min_votes_threshold);
        self.min_votes_threshold().set(min_votes_threshold);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: propose
    // The proposer's full voting power is cast immediately.
    // ========================================================

    #[endpoint(propose)]
    fn propose(
        &self,
        proposal: Proposal<Self::Api>,
        credential_id: u64,
    ) -> ProposalId<Self::Api> {
        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();

        require!(proposal.deadline >= now, INVALID_DEADLINE);
        require!(proposal.execution_time == 0, INVALID_TIME_OF_EXECUTION);
        require!(proposal.proposer == caller, INVALID_CALLER);

        let proposal_id = self.proposal_id(&proposal);
        require!(self.proposals(&proposal_id).is_empty(), ALREADY_PROPOSED);

        self.proposals(&proposal_id).set(&proposal);

        let full_power = self.voting_power_of(credential_id);
        self.cast_vote(&caller, &proposal_id, credential_id, &full_power);

        self.proposed_event(&proposal_id, &caller, now);

        proposal_id
    }

    // ========================================================
    // ENDPOINT: vote
    // One vote per principal per proposal, partial weight allowed.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: ProposalId<Self::Api>, credential_id: u64, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.cast_vote(&caller, &proposal_id, credential_id, &amount);
    }

    // ========================================================
    // ENDPOINT: veto
    // Permanent. Takes precedence over every other status.
    // ========================================================

    #[endpoint(veto)]
    fn veto(&self, proposal_id: ProposalId<Self::Api>) {
        self.require_administrator();
        require!(!self.proposals(&proposal_id).is_empty(), INVALID_PROPOSAL);

        self.proposals(&proposal_id).update(|p| p.vetoed = true);

        self.vetoed_event(&proposal_id);
    }

    // ========================================================
    // ENDPOINT: execute
    // Anyone may trigger a passed proposal. The execution time is
    // stored before dispatch, so a re-entrant execute sees Executed.
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(execute)]
    fn execute(&self, proposal_id: ProposalId<Self::Api>) -> MultiValue2<bool, u64> {
        require!(
            self.proposal_status(&proposal_id) == ProposalStatus::Passed,
            INVALID_PROPOSAL
        );

        let caller = self.blockchain().get_caller();
        let attached_value = self.call_value().egld_value().clone_value();

        // a zero timestamp would read back as "not executed"
        let executed_at = core::cmp::max(self.blockchain().get_block_timestamp(), 1);

        let proposal = self.proposals(&proposal_id).update(|p| {
            p.execution_time = executed_at;
            p.clone()
        });

        self.dispatch(&proposal, &attached_value);

        self.executed_event(&proposal_id, &caller, executed_at, &attached_value);

        (true, executed_at).into()
    }

    // ========================================================
    // ENDPOINT: changeMinThreshold
    // ========================================================

    #[endpoint(changeMinThreshold)]
    fn change_min_threshold(&self, new_threshold: u64) {
        self.require_administrator();
        self.require_valid_threshold(new_threshold);

        let previous = self.min_votes_threshold().get();
        self.min_votes_threshold().set(new_threshold);

        self.threshold_changed_event(previous, new_threshold);
    }

    // ========================================================
    // ENDPOINT: withdrawValue
    // Sends the whole EGLD balance to the administrator.
    // ========================================================

    #[endpoint(withdrawValue)]
    fn withdraw_value(&self) {
        self.require_administrator();

        let administrator = self.administrator().get();
        let balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);

        if balance > 0u64 {
            self.send().direct_egld(&administrator, &balance);
        }

        self.value_withdrawn_event(&administrator, &balance);
    }

    // ========================================================
    // ENDPOINT: receive
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(receive)]
    fn receive(&self) {
        let sender = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();

        self.value_received_event(&sender, &amount);
    }

    // ========================================================
    // INTERNAL: vote entry shared by propose and vote
    // ========================================================

    fn cast_vote(
        &self,
        voter: &ManagedAddress,
        proposal_id: &ProposalId<Self::Api>,
        credential_id: u64,
        amount: &BigUint,
    ) {
        require!(
            self.proposal_status(proposal_id).accepts_votes(),
            INVALID_PROPOSAL
        );
        require!(self.owner_of(credential_id) == *voter, INVALID_VOTER);
        require!(!self.has_voted(proposal_id, voter).get(), INVALID_VOTER);
        require!(
            *amount > 0u64 && *amount <= self.voting_power_of(credential_id),
            INVALID_VOTING_POWER
        );

        self.has_voted(proposal_id, voter).set(true);
        self.vote_count(proposal_id).update(|count| *count += amount);

        self.voted_event(proposal_id, voter, credential_id, amount);
    }

    // ========================================================
    // INTERNAL: status derivation
    // Precedence: vetoed, executed, expired, passed, active.
    // ========================================================

    fn proposal_status(&self, proposal_id: &ProposalId<Self::Api>) -> ProposalStatus {
        let mapper = self.proposals(proposal_id);
        require!(!mapper.is_empty(), INVALID_PROPOSAL);
        let proposal = mapper.get();

        if proposal.vetoed {
            return ProposalStatus::Vetoed;
        }
        if proposal.execution_time > 0 {
            return ProposalStatus::Executed;
        }
        if self.blockchain().get_block_timestamp() > proposal.deadline {
            return ProposalStatus::Expired;
        }
        if self.vote_count(proposal_id).get() >= self.vote_threshold() {
            return ProposalStatus::Passed;
        }
        ProposalStatus::Active
    }

    /// floor(totalVotingPower * minVotesThreshold / 10000), read live.
    fn vote_threshold(&self) -> BigUint {
        let total = self.total_voting_power().get();
        (&total * self.min_votes_threshold().get()) / BPS_DENOMINATOR
    }

    fn require_valid_threshold(&self, threshold: u64) {
        require!(
            (MIN_VOTES_THRESHOLD_FLOOR..=BPS_DENOMINATOR).contains(&threshold),
            THRESHOLD_OUT_OF_RANGE
        );
    }

    fn proposal_id(&self, proposal: &Proposal<Self::Api>) -> ProposalId<Self::Api> {
        let encoded =
            ManagedSerializer::<Self::Api>::new().top_encode_to_managed_buffer(&proposal.key());
        self.crypto().keccak256(&encoded)
    }

    // ========================================================
    // INTERNAL: dispatch
    // A failing sync call reverts the whole transaction,
    // execution time included.
    // ========================================================

    /// On failure the transaction aborts with the target's own error
    /// message, not a generic execution error.
    fn dispatch(&self, proposal: &Proposal<Self::Api>, value: &BigUint) {
        if proposal.function.is_empty() {
            if *value > 0u64 {
                self.send().direct_egld(&proposal.target, value);
            }
            return;
        }

        self.tx()
            .to(&proposal.target)
            .egld(value)
            .raw_call(proposal.function.clone())
            .arguments_raw(ManagedArgBuffer::from(proposal.arguments.clone()))
            .sync_call();
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getStatus)]
    fn get_status(&self, proposal_id: ProposalId<Self::Api>) -> ProposalStatus {
        self.proposal_status(&proposal_id)
    }

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: ProposalId<Self::Api>) -> Proposal<Self::Api> {
        require!(!self.proposals(&proposal_id).is_empty(), INVALID_PROPOSAL);
        self.proposals(&proposal_id).get()
    }

    #[view(getProposalId)]
    fn get_proposal_id(&self, proposal: Proposal<Self::Api>) -> ProposalId<Self::Api> {
        self.proposal_id(&proposal)
    }

    #[view(getVoteCount)]
    fn get_vote_count(&self, proposal_id: ProposalId<Self::Api>) -> BigUint {
        self.vote_count(&proposal_id).get()
    }

    #[view(hasVoted)]
    fn has_principal_voted(
        &self,
        proposal_id: ProposalId<Self::Api>,
        principal: ManagedAddress,
    ) -> bool {
        self.has_voted(&proposal_id, &principal).get()
    }

    #[view(getVoteThreshold)]
    fn get_vote_threshold(&self) -> BigUint {
        self.vote_threshold()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("proposed")]
    fn proposed_event(
        &self,
        #[indexed] proposal_id: &ProposalId<Self::Api>,
        #[indexed] proposer: &ManagedAddress,
        timestamp: u64,
    );

    #[event("voted")]
    fn voted_event(
        &self,
        #[indexed] proposal_id: &ProposalId<Self::Api>,
        #[indexed] voter: &ManagedAddress,
        #[indexed] credential_id: u64,
        amount: &BigUint,
    );

    #[event("executed")]
    fn executed_event(
        &self,
        #[indexed] proposal_id: &ProposalId<Self::Api>,
        #[indexed] caller: &ManagedAddress,
        #[indexed] executed_at: u64,
        value: &BigUint,
    );

    #[event("vetoed")]
    fn vetoed_event(&self, #[indexed] proposal_id: &ProposalId<Self::Api>);

    #[event("thresholdChanged")]
    fn threshold_changed_event(&self, #[indexed] previous: u64, #[indexed] next: u64);

    #[event("valueWithdrawn")]
    fn value_withdrawn_event(&self, #[indexed] to: &ManagedAddress, amount: &BigUint);

    #[event("valueReceived")]
    fn value_received_event(&self, #[indexed] from: &ManagedAddress, amount: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[view(getMinVotesThreshold)]
    #[storage_mapper("minVotesThreshold")]
    fn min_votes_threshold(&self) -> SingleValueMapper<u64>;

    // ── Proposals ──

    #[storage_mapper("proposals")]
    fn proposals(
        &self,
        proposal_id: &ProposalId<Self::Api>,
    ) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("voteCount")]
    fn vote_count(&self, proposal_id: &ProposalId<Self::Api>) -> SingleValueMapper<BigUint>;

    #[storage_mapper("hasVoted")]
    fn has_voted(
        &self,
        proposal_id: &ProposalId<Self::Api>,
        voter: &ManagedAddress,
    ) -> SingleValueMapper<bool>;
}
