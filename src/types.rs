multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal — a directed payout request and its live tally
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub title: ManagedBuffer<M>,
    pub beneficiary: ManagedAddress<M>,
    pub amount: BigUint<M>,
    pub proposer: ManagedAddress<M>,
    pub yes_weight: BigUint<M>,
    pub no_weight: BigUint<M>,
    pub start_time: u64,
    /// Last second at which votes are still accepted
    pub end_time: u64,
    /// Set only once the payout transfer has gone through
    pub executed: bool,
}

impl<M: ManagedTypeApi> Proposal<M> {
    /// Voting window is inclusive on both ends.
    pub fn is_voting_open(&self, now: u64) -> bool {
        now >= self.start_time && now <= self.end_time
    }

    /// Execution is only possible strictly after `end_time`.
    pub fn has_voting_ended(&self, now: u64) -> bool {
        now > self.end_time
    }
}

// ============================================================
// Execution check — the three conditions a payout must clear
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub struct ExecutionCheck {
    pub has_quorum: bool,
    pub majority: bool,
    pub enough_funds: bool,
}

impl ExecutionCheck {
    pub fn passes(&self) -> bool {
        self.has_quorum && self.majority && self.enough_funds
    }
}

// ============================================================
// Proposal Status — derived on read, never stored
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Clock is inside the voting window.
    Voting,
    /// Window closed and a payout attempt would currently clear every check.
    Passing,
    /// Window closed but quorum, majority or funds are missing.
    /// Not terminal: an execution attempt may be retried.
    Failing,
    /// Payout transferred. Terminal.
    Executed,
}

// ============================================================
// Vote Record — weight captured at the moment of voting
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, Debug)]
pub struct VoteRecord<M: ManagedTypeApi> {
    pub voter: ManagedAddress<M>,
    pub support: bool,
    pub weight: BigUint<M>,
}
