use std::collections::{BTreeMap, HashMap, HashSet};

use crate::itemset::Itemset;

pub type ItemId = usize;
pub type ItemName = String;

pub type ReverseLookup = HashMap<ItemName, ItemId>;
pub type Inventory = Vec<ItemName>;

pub type ItemsetCounts = HashMap<Itemset, u32>;
pub type Candidates = HashSet<Itemset>;

pub type ItemsetLength = usize;
pub type Levels = BTreeMap<ItemsetLength, HashSet<Itemset>>;
