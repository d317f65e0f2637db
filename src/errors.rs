pub const ERR_INVALID_AMOUNT: &str = "Amount must be greater than zero";
pub const ERR_INSUFFICIENT_BALANCE: &str = "Insufficient contribution balance";
pub const ERR_NOT_A_CONTRIBUTOR: &str = "Caller has no contribution";
pub const ERR_EMPTY_TITLE: &str = "Title must not be empty";
pub const ERR_INVALID_BENEFICIARY: &str = "Invalid beneficiary address";
pub const ERR_AMOUNT_TOO_SMALL: &str = "Amount below minimum proposal amount";
pub const ERR_AMOUNT_EXCEEDS_POOL: &str = "Amount exceeds pool balance";
pub const ERR_INVALID_PROPOSAL: &str = "Proposal does not exist";
pub const ERR_VOTING_NOT_OPEN: &str = "Voting is not open";
pub const ERR_ALREADY_VOTED: &str = "Already voted";
pub const ERR_VOTING_STILL_ACTIVE: &str = "Voting period has not ended";
pub const ERR_ALREADY_EXECUTED: &str = "Proposal already executed";
pub const ERR_TRANSFER_FAILED: &str = "Transfer failed";
