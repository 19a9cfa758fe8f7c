//! End-to-end ledger flows through the `Token` facade: transfers,
//! allowances, fees, blacklist, pause and deprecation.

use token::{LedgerError, Token, TokenConfig, TokenError};

const INITIAL_SUPPLY: u64 = 1_000_000_000;

fn new_token() -> Token {
    Token::new("owner", TokenConfig::new("Ballast Dollar", "BLD", 6, INITIAL_SUPPLY))
}

fn assert_supply_conserved(token: &Token, accounts: &[&str]) {
    let sum: u64 = accounts.iter().map(|a| token.balance_of(a)).sum();
    assert_eq!(sum, token.total_supply(), "balances must sum to the supply");
}

#[test]
fn test_deployment_credits_owner() {
    let token = new_token();
    assert_eq!(token.name(), "Ballast Dollar");
    assert_eq!(token.symbol(), "BLD");
    assert_eq!(token.decimals(), 6);
    assert_eq!(token.owner(), "owner");
    assert_eq!(token.balance_of("owner"), INITIAL_SUPPLY);
    assert_eq!(token.total_supply(), INITIAL_SUPPLY);
    assert_eq!(token.voters_count(), 1, "owner is the only initial voter");
    assert!(!token.paused());
    assert!(!token.deprecated());
}

#[test]
fn test_transfer_approve_transfer_from_round() {
    let mut token = new_token();

    token.transfer("owner", "alice", 100).unwrap();
    token.approve("alice", "owner", 100).unwrap();
    token.transfer_from("owner", "alice", "bob", 100).unwrap();

    assert_eq!(token.balance_of("owner"), 999_999_900);
    assert_eq!(token.balance_of("alice"), 0);
    assert_eq!(token.balance_of("bob"), 100);
    assert_eq!(token.allowance("alice", "owner"), 0);
    assert_supply_conserved(&token, &["owner", "alice", "bob"]);
}

#[test]
fn test_transfer_exceeding_balance_fails_cleanly() {
    let mut token = new_token();
    token.transfer("owner", "alice", 100).unwrap();

    let err = token.transfer("alice", "bob", 101).unwrap_err();
    assert_eq!(
        err,
        TokenError::Ledger(LedgerError::InsufficientBalance {
            required: 101,
            available: 100,
        })
    );
    assert_eq!(token.balance_of("alice"), 100);
    assert_eq!(token.balance_of("bob"), 0);
}

#[test]
fn test_transfer_from_needs_allowance() {
    let mut token = new_token();
    token.transfer("owner", "alice", 500).unwrap();

    let err = token.transfer_from("bob", "alice", "bob", 200).unwrap_err();
    assert_eq!(
        err,
        TokenError::Ledger(LedgerError::InsufficientAllowance {
            required: 200,
            available: 0,
        })
    );

    token.approve("alice", "bob", 200).unwrap();
    token.transfer_from("bob", "alice", "bob", 200).unwrap();
    assert_eq!(token.balance_of("bob"), 200);
    assert_eq!(token.allowance("alice", "bob"), 0);
}

#[test]
fn test_increase_and_decrease_allowance() {
    let mut token = new_token();
    token.approve("owner", "alice", 100).unwrap();
    token.increase_allowance("owner", "alice", 150).unwrap();
    assert_eq!(token.allowance("owner", "alice"), 250);

    token.decrease_allowance("owner", "alice", 50).unwrap();
    assert_eq!(token.allowance("owner", "alice"), 200);

    // Over-decrease floors at zero rather than failing
    token.decrease_allowance("owner", "alice", 1_000).unwrap();
    assert_eq!(token.allowance("owner", "alice"), 0);
}

#[test]
fn test_fee_charged_to_recipient_side() {
    let mut token = new_token();
    token.transfer("owner", "alice", 10_000).unwrap();
    token.set_fee_params("owner", 50, 500).unwrap();
    token.update_receiving_fee_address("owner", "owner").unwrap();
    let owner_after_funding = token.balance_of("owner");

    // 10_000 at 50 bps: fee 50, recipient gets 9_950.
    token.transfer("alice", "bob", 10_000).unwrap();
    assert_eq!(token.balance_of("alice"), 0);
    assert_eq!(token.balance_of("bob"), 9_950);
    assert_eq!(token.balance_of("owner"), owner_after_funding + 50);
    assert_eq!(token.total_supply(), INITIAL_SUPPLY);
    assert_supply_conserved(&token, &["owner", "alice", "bob"]);
}

#[test]
fn test_fee_cap_and_fee_free_paths() {
    let mut token = new_token();
    token.set_fee_params("owner", 50, 500).unwrap();

    // No receiver configured yet: the full amount moves.
    token.transfer("owner", "alice", 10_000).unwrap();
    assert_eq!(token.balance_of("alice"), 10_000);

    token.update_receiving_fee_address("owner", "collector").unwrap();
    // 200_000 * 50 / 10_000 = 1_000, capped at 500.
    token.transfer("owner", "bob", 200_000).unwrap();
    assert_eq!(token.balance_of("bob"), 199_500);
    assert_eq!(token.balance_of("collector"), 500);
    assert_supply_conserved(&token, &["owner", "alice", "bob", "collector"]);
}

#[test]
fn test_fee_params_validation() {
    let mut token = new_token();
    assert_eq!(
        token.set_fee_params("owner", 10_001, 500),
        Err(TokenError::Ledger(LedgerError::InvalidFeeParams {
            rate_basis_points: 10_001,
        }))
    );
    assert_eq!(
        token.set_fee_params("alice", 50, 500),
        Err(TokenError::Ledger(LedgerError::Unauthorized))
    );
    assert_eq!(token.fee_params().rate_basis_points, 0);
}

#[test]
fn test_blacklisted_caller_is_frozen_until_removed() {
    let mut token = new_token();
    token.transfer("owner", "mallory", 1_000).unwrap();

    assert_eq!(
        token.add_black_list("mallory", "owner"),
        Err(TokenError::Ledger(LedgerError::Unauthorized)),
        "only the owner manages the blacklist"
    );
    token.add_black_list("owner", "mallory").unwrap();
    assert!(token.is_blacklisted("mallory"));

    let blocked = TokenError::Ledger(LedgerError::Blacklisted("mallory".to_string()));
    assert_eq!(token.transfer("mallory", "bob", 1), Err(blocked.clone()));
    assert_eq!(
        token.transfer_from("mallory", "owner", "bob", 1),
        Err(blocked.clone())
    );
    assert_eq!(token.approve("mallory", "bob", 1), Err(blocked.clone()));
    assert_eq!(
        token.increase_allowance("mallory", "bob", 1),
        Err(blocked.clone())
    );
    assert_eq!(token.decrease_allowance("mallory", "bob", 1), Err(blocked));

    token.remove_black_list("owner", "mallory").unwrap();
    assert!(!token.is_blacklisted("mallory"));
    token.transfer("mallory", "bob", 1).unwrap();
    assert_eq!(token.balance_of("bob"), 1);
}

#[test]
fn test_destroy_black_funds_shrinks_supply() {
    let mut token = new_token();
    token.transfer("owner", "mallory", 1_000).unwrap();

    assert_eq!(
        token.destroy_black_funds("owner", "mallory"),
        Err(TokenError::Ledger(LedgerError::NotBlacklisted(
            "mallory".to_string()
        )))
    );

    token.add_black_list("owner", "mallory").unwrap();
    let destroyed = token.destroy_black_funds("owner", "mallory").unwrap();
    assert_eq!(destroyed, 1_000);
    assert_eq!(token.balance_of("mallory"), 0);
    assert_eq!(token.total_supply(), INITIAL_SUPPLY - 1_000);
    assert_supply_conserved(&token, &["owner", "mallory"]);
}

#[test]
fn test_pause_blocks_movement_but_not_admin() {
    let mut token = new_token();
    token.pause("owner").unwrap();
    assert!(token.paused());

    assert_eq!(
        token.transfer("owner", "alice", 1),
        Err(TokenError::Ledger(LedgerError::Paused))
    );
    assert_eq!(
        token.burn("owner", 1),
        Err(TokenError::Ledger(LedgerError::Paused))
    );
    // Admin operations stay available while paused
    token.add_black_list("owner", "mallory").unwrap();
    token.set_fee_params("owner", 10, 100).unwrap();

    token.unpause("owner").unwrap();
    token.transfer("owner", "alice", 1).unwrap();
    assert_eq!(token.balance_of("alice"), 1);
}

#[test]
fn test_allowance_ops_work_while_paused_and_deprecated() {
    let mut token = new_token();
    token.pause("owner").unwrap();

    // Grants are bookkeeping, not movement; pause does not block them.
    token.approve("owner", "alice", 100).unwrap();
    token.increase_allowance("owner", "alice", 50).unwrap();
    token.decrease_allowance("owner", "alice", 30).unwrap();
    assert_eq!(token.allowance("owner", "alice"), 120);

    token.deprecate("owner", "token-v2").unwrap();
    token.approve("owner", "alice", 500).unwrap();
    token.increase_allowance("owner", "alice", 7).unwrap();
    token.decrease_allowance("owner", "alice", 7).unwrap();
    assert_eq!(token.allowance("owner", "alice"), 500);

    // Spending the grant is movement and stays redirected.
    assert_eq!(
        token.transfer_from("alice", "owner", "alice", 1),
        Err(TokenError::Ledger(LedgerError::DeprecatedRedirect {
            successor: "token-v2".to_string(),
        }))
    );
}

#[test]
fn test_burn_reduces_balance_and_supply() {
    let mut token = new_token();
    token.burn("owner", 2_500).unwrap();
    assert_eq!(token.balance_of("owner"), INITIAL_SUPPLY - 2_500);
    assert_eq!(token.total_supply(), INITIAL_SUPPLY - 2_500);
}

#[test]
fn test_deprecation_redirects_and_freezes_history() {
    let mut token = new_token();
    token.transfer("owner", "alice", 300).unwrap();
    assert_eq!(
        token.old_balance_of("alice"),
        300,
        "before deprecation the live balance is reported"
    );

    assert_eq!(
        token.deprecate("alice", "token-v2"),
        Err(TokenError::Ledger(LedgerError::Unauthorized))
    );
    token.deprecate("owner", "token-v2").unwrap();
    assert!(token.deprecated());
    assert_eq!(token.successor(), Some("token-v2"));

    let redirect = TokenError::Ledger(LedgerError::DeprecatedRedirect {
        successor: "token-v2".to_string(),
    });
    assert_eq!(token.transfer("owner", "alice", 1), Err(redirect.clone()));
    assert_eq!(token.burn("owner", 1), Err(redirect));

    assert_eq!(token.old_balance_of("owner"), INITIAL_SUPPLY - 300);
    assert_eq!(token.old_balance_of("alice"), 300);
    assert_eq!(
        token.deprecate("owner", "token-v3"),
        Err(TokenError::Ledger(LedgerError::AlreadyDeprecated))
    );
}
