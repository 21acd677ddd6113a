#![no_std]

multiversx_sc::imports!();

pub mod dao_proxy;

use dao_proxy::ProposalStatus;

/// Dispatch target used by the DAO tests. Each endpoint stands in for a
/// different kind of governed action.
#[multiversx_sc::contract]
pub trait DispatchProbe {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    /// Well-behaved action: keeps the attached value and the last note.
    #[payable("EGLD")]
    #[endpoint(record)]
    fn record(&self, note: ManagedBuffer) {
        let payment = self.call_value().egld_value().clone_value();

        self.received_value().update(|v| *v += &payment);
        self.last_note().set(&note);
        self.call_count().update(|c| *c += 1);
    }

    /// Action that always fails, even when paid.
    #[payable("EGLD")]
    #[endpoint(refuse)]
    fn refuse(&self) {
        sc_panic!("probe refused the call");
    }

    /// Points the probe at a proposal. Needed because a proposal's
    /// arguments cannot contain its own identifier.
    #[endpoint(watch)]
    fn watch(&self, dao: ManagedAddress, proposal_id: ManagedByteArray<Self::Api, 32>) {
        self.watched_dao().set(&dao);
        self.watched_proposal().set(&proposal_id);
    }

    /// Reads the watched proposal's status back from the DAO mid-dispatch.
    #[endpoint(observeStatus)]
    fn observe_status(&self) {
        let proposal_id = self.watched_proposal().get();
        let status = self
            .tx()
            .to(&self.watched_dao().get())
            .typed(dao_proxy::MembershipDaoProxy)
            .get_status(proposal_id)
            .returns(ReturnsResult)
            .sync_call();

        self.observed_status().set(status);
        self.call_count().update(|c| *c += 1);
    }

    /// Tries to execute the watched proposal again from inside its dispatch.
    #[endpoint(reenter)]
    fn reenter(&self) {
        self.call_count().update(|c| *c += 1);

        let proposal_id = self.watched_proposal().get();
        self.tx()
            .to(&self.watched_dao().get())
            .typed(dao_proxy::MembershipDaoProxy)
            .execute(proposal_id)
            .sync_call();
    }

    #[storage_mapper("watchedDao")]
    fn watched_dao(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("watchedProposal")]
    fn watched_proposal(&self) -> SingleValueMapper<ManagedByteArray<Self::Api, 32>>;

    #[view(getReceivedValue)]
    #[storage_mapper("receivedValue")]
    fn received_value(&self) -> SingleValueMapper<BigUint>;

    #[view(getLastNote)]
    #[storage_mapper("lastNote")]
    fn last_note(&self) -> SingleValueMapper<ManagedBuffer>;

    #[view(getCallCount)]
    #[storage_mapper("callCount")]
    fn call_count(&self) -> SingleValueMapper<u64>;

    #[view(getObservedStatus)]
    #[storage_mapper("observedStatus")]
    fn observed_status(&self) -> SingleValueMapper<ProposalStatus>;
}
