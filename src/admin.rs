multiversx_sc::imports!();

use crate::errors::{INVALID_RECIPIENT, NOT_ADMINISTRATOR};

/// Single-administrator gate shared by the registry and the ledger.
#[multiversx_sc::module]
pub trait AdminModule {
    fn require_administrator(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.administrator().get(), NOT_ADMINISTRATOR);
    }

    #[endpoint(transferAdministration)]
    fn transfer_administration(&self, new_administrator: ManagedAddress) {
        self.require_administrator();
        require!(!new_administrator.is_zero(), INVALID_RECIPIENT);

        let previous = self.administrator().get();
        self.administrator().set(&new_administrator);

        self.administration_transferred_event(&previous, &new_administrator);
    }

    #[event("administrationTransferred")]
    fn administration_transferred_event(
        &self,
        #[indexed] previous: &ManagedAddress,
        #[indexed] next: &ManagedAddress,
    );

    #[view(getAdministrator)]
    #[storage_mapper("administrator")]
    fn administrator(&self) -> SingleValueMapper<ManagedAddress>;
}
