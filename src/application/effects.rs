use std::collections::HashMap;

use crate::domain::errors::TransactionRecordError;
use crate::domain::models::{BalanceChange, TokenBalanceChange, TransactionEffect};
use crate::infrastructure::wire::{TokenBalance, TransactionRecord};

/// Lamports of one account before and after a transaction.
struct AccountSnapshot<'a> {
    address: &'a str,
    before: u64,
    after: u64,
}

impl AccountSnapshot<'_> {
    fn delta(&self) -> Result<i64, TransactionRecordError> {
        i64::try_from(i128::from(self.after) - i128::from(self.before))
            .map_err(|_| TransactionRecordError::DeltaOverflow(self.address.to_string()))
    }
}

/// Derives the balance effect of a confirmed transaction.
///
/// The fee payer is the first account key. A record without metadata yields a zero fee and
/// no changes.
pub fn derive_effect(record: &TransactionRecord) -> Result<TransactionEffect, TransactionRecordError> {
    let static_keys = &record.transaction.message.account_keys;
    let fee_payer = static_keys
        .first()
        .ok_or(TransactionRecordError::MissingFeePayer)?
        .clone();

    let (fee, err, balance_changes, token_balance_changes) = match &record.meta {
        Some(meta) => {
            // Balances of versioned transactions also cover lookup table accounts,
            // ordered after the static keys: writable first, then readonly.
            let account_keys: Vec<&str> = static_keys
                .iter()
                .chain(meta.loaded_addresses.iter().flat_map(|loaded| {
                    loaded.writable.iter().chain(loaded.readonly.iter())
                }))
                .map(String::as_str)
                .collect();

            let balance_changes =
                lamport_changes(&account_keys, &meta.pre_balances, &meta.post_balances)?;
            let token_balance_changes = token_changes(
                meta.pre_token_balances.as_deref().unwrap_or_default(),
                meta.post_token_balances.as_deref().unwrap_or_default(),
            );
            (meta.fee, meta.err.clone(), balance_changes, token_balance_changes)
        }
        None => (0, None, Vec::new(), Vec::new()),
    };

    Ok(TransactionEffect {
        signature: record.transaction.signatures.first().cloned(),
        slot: record.slot,
        block_time: record.block_time,
        fee,
        fee_payer,
        err,
        balance_changes,
        token_balance_changes,
    })
}

fn lamport_changes(
    account_keys: &[&str],
    pre_balances: &[u64],
    post_balances: &[u64],
) -> Result<Vec<BalanceChange>, TransactionRecordError> {
    if pre_balances.len() != post_balances.len() {
        return Err(TransactionRecordError::BalanceLengthMismatch {
            pre: pre_balances.len(),
            post: post_balances.len(),
        });
    }

    // Every balance needs a key, changed or not
    if post_balances.len() > account_keys.len() {
        return Err(TransactionRecordError::MissingAccountKey(account_keys.len()));
    }

    account_keys
        .iter()
        .copied()
        .zip(pre_balances.iter().zip(post_balances.iter()))
        .filter(|(_, (before, after))| before != after)
        .map(|(address, (before, after))| {
            let snapshot = AccountSnapshot {
                address,
                before: *before,
                after: *after,
            };
            Ok(BalanceChange {
                address: address.to_string(),
                delta: snapshot.delta()?,
            })
        })
        .collect()
}

/// Token balances are matched on `(owner, mint)`: the lists are not aligned and a post
/// entry may have no pre-image at all, in which case its pre amount is zero.
fn token_changes(pre: &[TokenBalance], post: &[TokenBalance]) -> Vec<TokenBalanceChange> {
    let mut pre_by_owner: HashMap<(Option<&str>, &str), f64> = HashMap::with_capacity(pre.len());
    for balance in pre {
        pre_by_owner
            .entry((balance.owner.as_deref(), balance.mint.as_str()))
            .or_insert_with(|| ui_amount(balance));
    }

    post.iter()
        .filter_map(|balance| {
            let before = pre_by_owner
                .get(&(balance.owner.as_deref(), balance.mint.as_str()))
                .copied()
                .unwrap_or(0.0);
            let delta = round_to_decimals(
                ui_amount(balance) - before,
                balance.ui_token_amount.decimals,
            );
            (delta != 0.0).then(|| TokenBalanceChange {
                owner: balance.owner.clone(),
                mint: balance.mint.clone(),
                delta,
            })
        })
        .collect()
}

fn ui_amount(balance: &TokenBalance) -> f64 {
    balance
        .ui_token_amount
        .ui_amount_string
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .unwrap_or(0.0)
}

/// Drops the float noise of subtracting two decimal amounts, e.g. `0.3 - 0.1`.
fn round_to_decimals(delta: f64, decimals: u8) -> f64 {
    let scale = 10f64.powi(i32::from(decimals));
    let scaled = delta * scale;
    if scaled.is_finite() {
        scaled.round() / scale
    } else {
        delta
    }
}
