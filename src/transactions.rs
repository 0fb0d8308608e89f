use bitvec::vec::BitVec;
use log::debug;

use crate::{
    error::{Error, Result},
    itemset::Itemset,
    types::{Candidates, Inventory, ItemId, ReverseLookup},
};

const APPROX_NUM_UNIQUE_ITEMS: usize = 1024; // arbitrary
const APPROX_NUM_TRANSACTIONS: usize = 1024; // arbitrary

/// One input record as a bit set over item ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    items: BitVec,
    width: usize,
}

impl Transaction {
    pub(crate) fn from_ids(ids: &[ItemId], num_items: usize) -> Self {
        let mut items: BitVec = BitVec::repeat(false, num_items);
        for &id in ids {
            items.set(id, true);
        }
        let width = items.count_ones();
        Transaction { items, width }
    }

    /// Number of distinct items in the transaction.
    pub fn len(&self) -> usize {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0
    }

    pub fn contains_item(&self, item: ItemId) -> bool {
        self.items.get(item).map_or(false, |bit| *bit)
    }

    pub fn contains(&self, itemset: &Itemset) -> bool {
        itemset.len() <= self.width && itemset.iter().all(|&item| self.contains_item(item))
    }

    pub fn items(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.iter_ones()
    }
}

/// Interned view over the raw records: the distinct items seen and the
/// transaction list, both fixed once built.
#[derive(Debug, Clone)]
pub struct TransactionIndex {
    inventory: Inventory,
    reverse_lookup: ReverseLookup,
    transactions: Vec<Transaction>,
}

impl TransactionIndex {
    /// Intern every token and build one transaction per record, in input
    /// order. Duplicate tokens within a record collapse.
    pub fn new<I, R, T>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut reverse_lookup: ReverseLookup =
            ReverseLookup::with_capacity(APPROX_NUM_UNIQUE_ITEMS);
        let mut inventory: Inventory = Vec::with_capacity(APPROX_NUM_UNIQUE_ITEMS);
        let mut transactions = Vec::with_capacity(APPROX_NUM_TRANSACTIONS);
        let mut ids: Vec<ItemId> = Vec::new();

        for record in records {
            ids.clear();

            for token in record {
                let token = token.as_ref();
                let item_id = match reverse_lookup.get(token) {
                    Some(&item_id) => item_id,
                    None => {
                        let item_id = inventory.len();
                        reverse_lookup.insert(token.to_owned(), item_id);
                        inventory.push(token.to_owned());
                        item_id
                    }
                };
                ids.push(item_id);
            }

            // ids of this record are all below the current inventory size
            transactions.push(Transaction::from_ids(&ids, inventory.len()));
        }

        if transactions.is_empty() {
            return Err(Error::EmptyInput);
        }

        debug!(
            "Indexed {} transactions over {} distinct items",
            transactions.len(),
            inventory.len()
        );

        Ok(TransactionIndex {
            inventory,
            reverse_lookup,
            transactions,
        })
    }

    /// Number of transactions.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn num_items(&self) -> usize {
        self.inventory.len()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// One 1-itemset per distinct item.
    pub fn singletons(&self) -> Candidates {
        (0..self.inventory.len()).map(Itemset::singleton).collect()
    }

    pub fn item_id(&self, name: &str) -> Option<ItemId> {
        self.reverse_lookup.get(name).copied()
    }

    pub fn item_name(&self, item: ItemId) -> Option<&str> {
        self.inventory.get(item).map(String::as_str)
    }

    /// Build an itemset from item names; `None` if any name was never seen.
    pub fn itemset<T: AsRef<str>>(&self, names: &[T]) -> Option<Itemset> {
        names
            .iter()
            .map(|name| self.item_id(name.as_ref()))
            .collect::<Option<Vec<ItemId>>>()
            .map(Itemset::new)
    }

    /// Item names of an itemset, sorted for display.
    pub fn names(&self, itemset: &Itemset) -> Vec<&str> {
        let mut names: Vec<&str> = itemset
            .iter()
            .filter_map(|&item| self.item_name(item))
            .collect();
        names.sort_unstable();
        names
    }
}
