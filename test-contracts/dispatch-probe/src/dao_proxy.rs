use multiversx_sc::proxy_imports::*;

pub struct MembershipDaoProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for MembershipDaoProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = MembershipDaoProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        MembershipDaoProxyMethods { wrapped_tx: tx }
    }
}

pub struct MembershipDaoProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> MembershipDaoProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn get_status<Arg0: ProxyArg<ManagedByteArray<Env::Api, 32>>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ProposalStatus> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getStatus")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn execute<Arg0: ProxyArg<ManagedByteArray<Env::Api, 32>>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, MultiValue2<bool, u64>> {
        self.wrapped_tx
            .raw_call("execute")
            .argument(&proposal_id)
            .original_result()
    }
}

/// Mirror of the DAO's status enum; variant order must match.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProposalStatus {
    Active,
    Passed,
    Expired,
    Executed,
    Vetoed,
}
