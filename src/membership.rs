multiversx_sc::imports!();

use crate::errors::{
    CANNOT_OWN_MORE_THAN_ONE, INVALID_BOUNDS, INVALID_RECIPIENT, INVALID_VOTING_POWER,
    UNKNOWN_CREDENTIAL,
};

// ============================================================
// Membership Registry
// One credential per principal, each with a fixed voting power.
// Invariant: totalVotingPower == sum of live credential powers
//            <= maxTotalVotingPower
// ============================================================

#[multiversx_sc::module]
pub trait MembershipModule: crate::admin::AdminModule {
    fn init_membership(
        &self,
        min_voting_power: BigUint,
        max_voting_power: BigUint,
        max_total_voting_power: BigUint,
    ) {
        require!(
            min_voting_power < max_voting_power && max_voting_power < max_total_voting_power,
            INVALID_BOUNDS
        );

        self.min_voting_power().set(&min_voting_power);
        self.max_voting_power().set(&max_voting_power);
        self.max_total_voting_power().set(&max_total_voting_power);
        self.total_voting_power().set(BigUint::zero());
        self.last_credential_id().set(0u64);
    }

    // ========================================================
    // ENDPOINT: issue
    // Requests above the remaining headroom are clamped, not rejected.
    // ========================================================

    #[endpoint(issue)]
    fn issue(&self, to: ManagedAddress, requested_power: BigUint) -> u64 {
        self.require_administrator();
        require!(!to.is_zero(), INVALID_RECIPIENT);
        require!(
            requested_power >= self.min_voting_power().get()
                && requested_power <= self.max_voting_power().get(),
            INVALID_VOTING_POWER
        );

        let total = self.total_voting_power().get();
        let max_total = self.max_total_voting_power().get();
        let power = if &requested_power + &total > max_total {
            &max_total - &total
        } else {
            requested_power
        };
        require!(power > 0u64, INVALID_VOTING_POWER);

        require!(self.credential_of(&to).is_empty(), CANNOT_OWN_MORE_THAN_ONE);

        let credential_id = self.last_credential_id().update(|last| {
            *last += 1;
            *last
        });

        self.credential_owner(credential_id).set(&to);
        self.credential_power(credential_id).set(&power);
        self.credential_of(&to).set(credential_id);
        self.total_voting_power().update(|t| *t += &power);

        self.issued_event(&to, credential_id, &power);

        credential_id
    }

    // ========================================================
    // ENDPOINT: revoke
    // Burns the credential and frees its owner for a new one.
    // ========================================================

    #[endpoint(revoke)]
    fn revoke(&self, credential_id: u64) {
        self.require_administrator();

        let owner = self.owner_of(credential_id);
        let power = self.credential_power(credential_id).take();

        self.total_voting_power().update(|t| *t -= &power);
        self.credential_owner(credential_id).clear();
        self.credential_of(&owner).clear();

        self.revoked_event(&owner, credential_id, &power);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(ownerOf)]
    fn owner_of(&self, credential_id: u64) -> ManagedAddress {
        let owner = self.credential_owner(credential_id);
        require!(!owner.is_empty(), UNKNOWN_CREDENTIAL);
        owner.get()
    }

    #[view(votingPowerOf)]
    fn voting_power_of(&self, credential_id: u64) -> BigUint {
        require!(
            !self.credential_owner(credential_id).is_empty(),
            UNKNOWN_CREDENTIAL
        );
        self.credential_power(credential_id).get()
    }

    #[view(getVotingPowerBounds)]
    fn get_voting_power_bounds(&self) -> MultiValue3<BigUint, BigUint, BigUint> {
        (
            self.min_voting_power().get(),
            self.max_voting_power().get(),
            self.max_total_voting_power().get(),
        )
            .into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("issued")]
    fn issued_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] credential_id: u64,
        voting_power: &BigUint,
    );

    #[event("revoked")]
    fn revoked_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] credential_id: u64,
        voting_power: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Bounds ──

    #[storage_mapper("minVotingPower")]
    fn min_voting_power(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("maxVotingPower")]
    fn max_voting_power(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("maxTotalVotingPower")]
    fn max_total_voting_power(&self) -> SingleValueMapper<BigUint>;

    // ── Credentials ──

    #[view(getTotalVotingPower)]
    #[storage_mapper("totalVotingPower")]
    fn total_voting_power(&self) -> SingleValueMapper<BigUint>;

    #[view(getLastCredentialId)]
    #[storage_mapper("lastCredentialId")]
    fn last_credential_id(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("credentialOwner")]
    fn credential_owner(&self, credential_id: u64) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("credentialPower")]
    fn credential_power(&self, credential_id: u64) -> SingleValueMapper<BigUint>;

    /// 0 when the principal holds no credential.
    #[view(getCredentialOf)]
    #[storage_mapper("credentialOf")]
    fn credential_of(&self, owner: &ManagedAddress) -> SingleValueMapper<u64>;
}
