#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod types;

use errors::*;
use types::{ExecutionCheck, Proposal, ProposalStatus, VoteRecord};

// ============================================================
// Constants
// ============================================================

/// Voting window: 3 days in seconds
const VOTING_DURATION: u64 = 259_200;

/// Yes weight must reach 10% of the total contributed
const QUORUM_PERCENT: u64 = 10;

/// Smallest payout a proposal may request: 0.01 EGLD
const MIN_PROPOSAL_AMOUNT: u64 = 10_000_000_000_000_000;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait PoolLedger {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self) {
        self.total_contributed().set(BigUint::zero());
        self.proposal_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: contribute
    // Any EGLD sent here is credited to the sender.
    // ========================================================

    #[endpoint(contribute)]
    #[payable("EGLD")]
    fn contribute(&self) {
        let caller = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();
        require!(amount > 0u64, ERR_INVALID_AMOUNT);

        self.contribution(&caller).update(|balance| *balance += &amount);
        self.total_contributed().update(|total| *total += &amount);
        self.contributors().insert(caller.clone());

        self.contributed_event(&caller, &amount);
    }

    // ========================================================
    // ENDPOINT: withdrawContribution
    // No cooldown and no link to votes already cast.
    // ========================================================

    #[endpoint(withdrawContribution)]
    fn withdraw_contribution(&self, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(amount > 0u64, ERR_INVALID_AMOUNT);

        let balance = self.contribution(&caller).get();
        require!(amount <= balance, ERR_INSUFFICIENT_BALANCE);
        // Payouts drain custody without touching the ledger
        require!(amount <= self.custody_balance(), ERR_TRANSFER_FAILED);

        // Ledger is debited before the refund leaves the contract
        let remaining = &balance - &amount;
        self.contribution(&caller).set(&remaining);
        self.total_contributed().update(|total| *total -= &amount);
        if remaining == 0u64 {
            self.contributors().swap_remove(&caller);
        }

        if !self.try_send_egld(&caller, &amount) {
            // reverts the debit above as well
            sc_panic!(ERR_TRANSFER_FAILED);
        }

        self.withdrawn_contribution_event(&caller, &amount);
    }

    // ========================================================
    // ENDPOINT: createProposal
    // Only current contributors can propose.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(
        &self,
        title: ManagedBuffer,
        beneficiary: ManagedAddress,
        amount: BigUint,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        require!(
            self.contribution(&caller).get() > 0u64,
            ERR_NOT_A_CONTRIBUTOR
        );
        require!(!title.is_empty(), ERR_EMPTY_TITLE);
        require!(!beneficiary.is_zero(), ERR_INVALID_BENEFICIARY);
        require!(amount >= MIN_PROPOSAL_AMOUNT, ERR_AMOUNT_TOO_SMALL);
        require!(amount <= self.custody_balance(), ERR_AMOUNT_EXCEEDS_POOL);

        let proposal_id = self.proposal_count().get();
        let now = self.blockchain().get_block_timestamp();
        let end_time = now + VOTING_DURATION;

        let proposal = Proposal {
            id: proposal_id,
            title,
            beneficiary: beneficiary.clone(),
            amount: amount.clone(),
            proposer: caller.clone(),
            yes_weight: BigUint::zero(),
            no_weight: BigUint::zero(),
            start_time: now,
            end_time,
            executed: false,
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id + 1);

        self.proposal_created_event(proposal_id, &caller, &beneficiary, &amount, end_time);

        proposal_id
    }

    // ========================================================
    // ENDPOINT: vote
    // Weight is the voter's live contribution at call time.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64, support: bool) {
        let caller = self.blockchain().get_caller();
        let mut proposal = self.require_proposal(proposal_id);

        let now = self.blockchain().get_block_timestamp();
        require!(proposal.is_voting_open(now), ERR_VOTING_NOT_OPEN);

        let weight = self.contribution(&caller).get();
        require!(weight > 0u64, ERR_NOT_A_CONTRIBUTOR);
        require!(
            !self.has_voted(proposal_id, &caller).get(),
            ERR_ALREADY_VOTED
        );

        if support {
            proposal.yes_weight += &weight;
        } else {
            proposal.no_weight += &weight;
        }

        // Marker is permanent: never cleared on withdraw or further deposits
        self.has_voted(proposal_id, &caller).set(true);
        self.vote_records(proposal_id).push(&VoteRecord {
            voter: caller.clone(),
            support,
            weight: weight.clone(),
        });
        self.proposals(proposal_id).set(&proposal);

        self.voted_event(proposal_id, &caller, support, &weight);
    }

    // ========================================================
    // ENDPOINT: executeProposal
    // Anyone may call once the window has closed. A failed
    // attempt leaves the proposal open for another try.
    // ========================================================

    #[endpoint(executeProposal)]
    fn execute_proposal(&self, proposal_id: u64) {
        let proposal = match self.begin_execution(proposal_id) {
            Some(proposal) => proposal,
            None => return,
        };

        let transferred = self.try_send_egld(&proposal.beneficiary, &proposal.amount);
        self.settle_execution(proposal, transferred);
    }

    /// Evaluates the outcome and, when it passes, commits `executed` ahead of
    /// the payout so a re-entrant call sees it set. Returns `None` after
    /// reporting a failed outcome.
    fn begin_execution(&self, proposal_id: u64) -> Option<Proposal<Self::Api>> {
        let mut proposal = self.require_proposal(proposal_id);

        let now = self.blockchain().get_block_timestamp();
        require!(proposal.has_voting_ended(now), ERR_VOTING_STILL_ACTIVE);
        require!(!proposal.executed, ERR_ALREADY_EXECUTED);

        if !self.execution_check(&proposal).passes() {
            self.proposal_executed_event(proposal_id, false);
            return None;
        }

        proposal.executed = true;
        self.proposals(proposal_id).set(&proposal);
        Some(proposal)
    }

    /// Final step once the payout has been attempted. A failed transfer moved
    /// no funds, so the flag goes back to false and the proposal stays retryable.
    fn settle_execution(&self, mut proposal: Proposal<Self::Api>, transferred: bool) {
        if !transferred {
            proposal.executed = false;
            self.proposals(proposal.id).set(&proposal);
        }

        self.proposal_executed_event(proposal.id, transferred);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        require!(
            proposal_id < self.proposal_count().get(),
            ERR_INVALID_PROPOSAL
        );
        self.proposals(proposal_id).get()
    }

    fn custody_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }

    fn required_quorum(&self) -> BigUint {
        (&self.total_contributed().get() * QUORUM_PERCENT) / 100u64
    }

    fn execution_check(&self, proposal: &Proposal<Self::Api>) -> ExecutionCheck {
        ExecutionCheck {
            has_quorum: proposal.yes_weight >= self.required_quorum(),
            majority: proposal.yes_weight > proposal.no_weight,
            enough_funds: proposal.amount <= self.custody_balance(),
        }
    }

    /// Plain EGLD transfer whose failure comes back as `false` instead of
    /// aborting the call, so the caller decides what to roll back.
    fn try_send_egld(&self, to: &ManagedAddress, amount: &BigUint) -> bool {
        self.send_raw()
            .direct_egld_execute(
                to,
                amount,
                0,
                &ManagedBuffer::new(),
                &ManagedArgBuffer::new(),
            )
            .is_ok()
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(proposalsCount)]
    fn proposals_count(&self) -> u64 {
        self.proposal_count().get()
    }

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        self.require_proposal(proposal_id)
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();
        let end = core::cmp::min(from.saturating_add(count), total);

        for id in from..end {
            result.push(self.proposals(id).get());
        }
        result
    }

    #[view(getActiveProposals)]
    fn get_active_proposals(&self) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();
        let now = self.blockchain().get_block_timestamp();

        for id in 0..total {
            let proposal = self.proposals(id).get();
            if proposal.is_voting_open(now) {
                result.push(proposal);
            }
        }
        result
    }

    #[view(getProposalStatus)]
    fn get_proposal_status(&self, proposal_id: u64) -> ProposalStatus {
        let proposal = self.require_proposal(proposal_id);
        let now = self.blockchain().get_block_timestamp();

        if proposal.executed {
            ProposalStatus::Executed
        } else if !proposal.has_voting_ended(now) {
            ProposalStatus::Voting
        } else if self.execution_check(&proposal).passes() {
            ProposalStatus::Passing
        } else {
            ProposalStatus::Failing
        }
    }

    #[view(getExecutionCheck)]
    fn get_execution_check(&self, proposal_id: u64) -> ExecutionCheck {
        let proposal = self.require_proposal(proposal_id);
        self.execution_check(&proposal)
    }

    #[view(getVoteRecords)]
    fn get_vote_records(&self, proposal_id: u64) -> MultiValueEncoded<VoteRecord<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for record in self.vote_records(proposal_id).iter() {
            result.push(record);
        }
        result
    }

    #[view(hasVoted)]
    fn has_voted_on(&self, proposal_id: u64, voter: &ManagedAddress) -> bool {
        self.has_voted(proposal_id, voter).get()
    }

    #[view(getContribution)]
    fn get_contribution(&self, participant: &ManagedAddress) -> BigUint {
        self.contribution(participant).get()
    }

    #[view(getTotalContributed)]
    fn get_total_contributed(&self) -> BigUint {
        self.total_contributed().get()
    }

    #[view(getContributorCount)]
    fn get_contributor_count(&self) -> u64 {
        self.contributors().len() as u64
    }

    #[view(getContributors)]
    fn get_contributors(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let len = self.contributors().len() as u64;
        let start = core::cmp::min(from, len) as usize;
        let end = core::cmp::min(from.saturating_add(count), len) as usize;

        for (idx, contributor) in self.contributors().iter().enumerate() {
            if idx >= end {
                break;
            }
            if idx >= start {
                result.push(contributor);
            }
        }
        result
    }

    #[view(getPoolStats)]
    fn get_pool_stats(&self) -> MultiValue4<BigUint, BigUint, u64, u64> {
        (
            self.custody_balance(),
            self.total_contributed().get(),
            self.contributors().len() as u64,
            self.proposal_count().get(),
        )
            .into()
    }

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue3<u64, u64, BigUint> {
        (
            VOTING_DURATION,
            QUORUM_PERCENT,
            BigUint::from(MIN_PROPOSAL_AMOUNT),
        )
            .into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("contributed")]
    fn contributed_event(&self, #[indexed] from: &ManagedAddress, amount: &BigUint);

    #[event("withdrawnContribution")]
    fn withdrawn_contribution_event(&self, #[indexed] from: &ManagedAddress, amount: &BigUint);

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] beneficiary: &ManagedAddress,
        #[indexed] amount: &BigUint,
        end_time: u64,
    );

    #[event("voted")]
    fn voted_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] support: bool,
        weight: &BigUint,
    );

    #[event("proposalExecuted")]
    fn proposal_executed_event(&self, #[indexed] proposal_id: u64, success: bool);

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Balance ledger ──

    #[storage_mapper("totalContributed")]
    fn total_contributed(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("contribution")]
    fn contribution(&self, participant: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("contributors")]
    fn contributors(&self) -> UnorderedSetMapper<ManagedAddress>;

    // ── Proposals ──

    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("voteRecords")]
    fn vote_records(&self, proposal_id: u64) -> VecMapper<VoteRecord<Self::Api>>;

    #[storage_mapper("hasVoted")]
    fn has_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;
}
