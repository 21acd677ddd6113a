// Shared world setup for the DAO tests. Each test file uses a subset.
#![allow(dead_code)]

use membership_dao::membership::MembershipModule;
use membership_dao::types::{Proposal, ProposalStatus};
use membership_dao::MembershipDao;
use multiversx_sc_scenario::api::DebugApi;
use multiversx_sc_scenario::imports::*;

pub const ADMIN: TestAddress = TestAddress::new("admin");
pub const ALICE: TestAddress = TestAddress::new("alice");
pub const BOB: TestAddress = TestAddress::new("bob");
pub const CAROL: TestAddress = TestAddress::new("carol");
pub const DAVE: TestAddress = TestAddress::new("dave");
pub const ERIN: TestAddress = TestAddress::new("erin");
pub const FRANK: TestAddress = TestAddress::new("frank");
pub const GRACE: TestAddress = TestAddress::new("grace");
pub const OUTSIDER: TestAddress = TestAddress::new("outsider");

pub const DAO: TestSCAddress = TestSCAddress::new("membership-dao");
pub const PROBE: TestSCAddress = TestSCAddress::new("dispatch-probe");

pub const DAO_CODE_PATH: MxscPath = MxscPath::new("output/membership-dao.mxsc.json");
pub const PROBE_CODE_PATH: MxscPath =
    MxscPath::new("test-contracts/dispatch-probe/output/dispatch-probe.mxsc.json");

pub const STARTING_BALANCE: u64 = 1_000_000;
pub const START: u64 = 1_700_000_000;
pub const DAY: u64 = 86_400;

pub type ProposalIdBytes = [u8; 32];

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(DAO_CODE_PATH, membership_dao::ContractBuilder);
    blockchain.register_contract(PROBE_CODE_PATH, dispatch_probe::ContractBuilder);
    blockchain
}

/// Fresh world with funded principals and a deployed DAO.
pub fn deploy(
    min_power: u64,
    max_power: u64,
    max_total_power: u64,
    threshold: u64,
) -> ScenarioWorld {
    let mut world = world();

    for principal in [ADMIN, ALICE, BOB, CAROL, DAVE, ERIN, FRANK, GRACE, OUTSIDER] {
        world.account(principal).nonce(1).balance(STARTING_BALANCE);
    }
    world.account(PROBE).nonce(1).code(PROBE_CODE_PATH).owner(ADMIN);
    world.current_block().block_timestamp(START);

    world
        .tx()
        .from(ADMIN)
        .raw_deploy()
        .code(DAO_CODE_PATH)
        .new_address(DAO)
        .whitebox(membership_dao::contract_obj, |sc| {
            sc.init(
                BigUint::from(min_power),
                BigUint::from(max_power),
                BigUint::from(max_total_power),
                threshold,
            );
        });

    world
}

/// Ledger fixture: alice 30 (credential 1), bob 30 (2), carol 40 (3).
/// Total voting power 100, threshold 50%.
pub fn deploy_with_members() -> ScenarioWorld {
    let mut world = deploy(1, 50, 100, 5_000);
    issue(&mut world, ALICE, 30);
    issue(&mut world, BOB, 30);
    issue(&mut world, CAROL, 40);
    world
}

pub fn issue(world: &mut ScenarioWorld, to: TestAddress, power: u64) -> u64 {
    let mut credential_id = 0;
    world
        .tx()
        .from(ADMIN)
        .to(DAO)
        .whitebox(membership_dao::contract_obj, |sc| {
            credential_id = sc.issue(to.to_managed_address(), BigUint::from(power));
        });
    credential_id
}

pub fn call_action(
    proposer: TestAddress,
    target: ManagedAddress<DebugApi>,
    function: &str,
    arguments: &[&[u8]],
    deadline: u64,
) -> Proposal<DebugApi> {
    let mut raw_arguments = ManagedVec::new();
    for argument in arguments {
        raw_arguments.push(ManagedBuffer::new_from_bytes(argument));
    }

    Proposal {
        proposer: proposer.to_managed_address(),
        target,
        function: ManagedBuffer::from(function),
        arguments: raw_arguments,
        deadline,
        execution_time: 0,
        vetoed: false,
    }
}

pub fn transfer_action(
    proposer: TestAddress,
    to: TestAddress,
    deadline: u64,
) -> Proposal<DebugApi> {
    call_action(proposer, to.to_managed_address(), "", &[], deadline)
}

pub fn propose_transfer(
    world: &mut ScenarioWorld,
    proposer: TestAddress,
    credential_id: u64,
    deadline: u64,
) -> ProposalIdBytes {
    let mut id = [0u8; 32];
    world
        .tx()
        .from(proposer)
        .to(DAO)
        .whitebox(membership_dao::contract_obj, |sc| {
            let proposal = transfer_action(proposer, OUTSIDER, deadline);
            id = sc.propose(proposal, credential_id).to_byte_array();
        });
    id
}

pub fn vote(
    world: &mut ScenarioWorld,
    voter: TestAddress,
    id: &ProposalIdBytes,
    credential_id: u64,
    amount: u64,
) {
    world
        .tx()
        .from(voter)
        .to(DAO)
        .whitebox(membership_dao::contract_obj, |sc| {
            sc.vote(
                ManagedByteArray::new_from_bytes(id),
                credential_id,
                BigUint::from(amount),
            );
        });
}

pub fn status(world: &mut ScenarioWorld, id: &ProposalIdBytes) -> ProposalStatus {
    let mut status = ProposalStatus::Active;
    world
        .query()
        .to(DAO)
        .whitebox(membership_dao::contract_obj, |sc| {
            status = sc.get_status(ManagedByteArray::new_from_bytes(id));
        });
    status
}

pub fn vote_count(world: &mut ScenarioWorld, id: &ProposalIdBytes) -> u64 {
    let mut count = 0;
    world
        .query()
        .to(DAO)
        .whitebox(membership_dao::contract_obj, |sc| {
            count = sc
                .get_vote_count(ManagedByteArray::new_from_bytes(id))
                .to_u64()
                .unwrap();
        });
    count
}

pub fn set_time(world: &mut ScenarioWorld, timestamp: u64) {
    world.current_block().block_timestamp(timestamp);
}
