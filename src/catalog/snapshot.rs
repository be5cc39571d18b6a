//! Immutable, content-addressed views of a normalized catalog.

use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;
use xxhash_rust::xxh64::Xxh64;

use crate::catalog::normalizer::NormalizedCatalog;
use crate::comparison::{standard_attributes, AttributeKind, Comparator, ComparisonTable};
use crate::core::{Error, Plan, Result, ToolRecord};
use crate::filtering::{query, FilterCriteria};
use crate::pricing::{EstimateParams, Estimator, PricingEstimate, RankedEstimate};

/// Content hash of a snapshot's tools.
///
/// Identical tool lists always share an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SnapshotId(u64);

impl SnapshotId {
    pub fn of(tools: &[ToolRecord]) -> Self {
        let mut hasher = Xxh64::new(0);
        hasher.update(&(tools.len() as u64).to_le_bytes());
        for tool in tools {
            hash_tool(&mut hasher, tool);
        }
        Self(hasher.digest())
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl Serialize for SnapshotId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn hash_str(hasher: &mut Xxh64, value: &str) {
    hasher.update(&(value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}

fn hash_strs(hasher: &mut Xxh64, values: &[String]) {
    hasher.update(&(values.len() as u64).to_le_bytes());
    for value in values {
        hash_str(hasher, value);
    }
}

fn hash_price(hasher: &mut Xxh64, price: Option<f64>) {
    match price {
        Some(price) => {
            hasher.update(&[1]);
            hasher.update(&price.to_bits().to_le_bytes());
        }
        None => hasher.update(&[0]),
    }
}

fn hash_plan(hasher: &mut Xxh64, plan: &Plan) {
    hash_str(hasher, &plan.name);
    hash_price(hasher, plan.monthly_price);
    hash_price(hasher, plan.yearly_price);
    hash_strs(hasher, &plan.features_included);
}

fn hash_tool(hasher: &mut Xxh64, tool: &ToolRecord) {
    hash_str(hasher, &tool.id);
    hash_str(hasher, &tool.name);
    hash_str(hasher, &tool.vendor);
    hash_str(hasher, &tool.description);
    hash_str(hasher, &tool.category);
    hash_strs(hasher, &tool.features.core);
    hash_strs(hasher, &tool.features.advanced);
    hash_strs(hasher, &tool.features.integrations);
    hasher.update(&(tool.pricing_plans.len() as u64).to_le_bytes());
    for plan in &tool.pricing_plans {
        hash_plan(hasher, plan);
    }
    hasher.update(&tool.rating.to_bits().to_le_bytes());
    hasher.update(&tool.review_count.to_le_bytes());
    hasher.update(&[u8::from(tool.free_trial)]);
    hash_strs(hasher, &tool.pros);
    hash_strs(hasher, &tool.cons);
    hash_str(hasher, &tool.official_url);
    match &tool.affiliate_url {
        Some(url) => {
            hasher.update(&[1]);
            hash_str(hasher, url);
        }
        None => hasher.update(&[0]),
    }
}

/// A frozen catalog. Clones share the same tool storage.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    id: SnapshotId,
    tools: Arc<[ToolRecord]>,
}

impl CatalogSnapshot {
    pub fn new(tools: Vec<ToolRecord>) -> Self {
        let id = SnapshotId::of(&tools);
        log::debug!("snapshot {} holds {} tools", id, tools.len());
        Self {
            id,
            tools: tools.into(),
        }
    }

    /// Freeze a normalized batch, reporting how many records were dropped.
    pub fn from_normalized(catalog: NormalizedCatalog) -> Self {
        if !catalog.dropped.is_empty() {
            log::info!(
                "{} of {} records were dropped during normalization",
                catalog.dropped_count(),
                catalog.total_records()
            );
        }
        Self::new(catalog.tools)
    }

    pub fn id(&self) -> SnapshotId {
        self.id
    }

    pub fn tools(&self) -> &[ToolRecord] {
        &self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ToolRecord> {
        self.tools.iter().find(|tool| tool.id == id)
    }

    /// Look up a tool, failing with `UnknownTool` when absent.
    pub fn require(&self, id: &str) -> Result<&ToolRecord> {
        self.get(id)
            .ok_or_else(|| Error::UnknownTool(id.to_string()))
    }

    /// Resolve several ids, preserving the order given.
    pub fn select<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<&ToolRecord>> {
        ids.iter().map(|id| self.require(id.as_ref())).collect()
    }

    pub fn query(&self, criteria: &FilterCriteria) -> Result<Vec<&ToolRecord>> {
        query(&self.tools, criteria)
    }

    /// Compare two tools of this snapshot on the given attributes.
    pub fn compare(&self, id_a: &str, id_b: &str, attributes: &[AttributeKind]) -> Result<SnapshotComparison> {
        let a = self.require(id_a)?;
        let b = self.require(id_b)?;
        Ok(SnapshotComparison {
            snapshot: self.id,
            table: Comparator::new(a, b).compare(attributes),
        })
    }

    /// Compare two tools on their standard attribute list.
    pub fn compare_standard(&self, id_a: &str, id_b: &str) -> Result<SnapshotComparison> {
        let a = self.require(id_a)?;
        let b = self.require(id_b)?;
        self.compare(id_a, id_b, &standard_attributes(a, b))
    }

    pub fn estimate(
        &self,
        id: &str,
        estimator: &Estimator,
        params: &EstimateParams,
    ) -> Result<PricingEstimate> {
        estimator.estimate(self.require(id)?, params)
    }

    /// Rank the named tools, or the whole catalog when `ids` is empty.
    pub fn rank<S: AsRef<str>>(
        &self,
        ids: &[S],
        estimator: &Estimator,
        params: &EstimateParams,
    ) -> Result<Vec<RankedEstimate<'_>>> {
        if ids.is_empty() {
            return estimator.rank(self.tools.iter(), params);
        }
        let tools = self.select(ids)?;
        estimator.rank(tools, params)
    }
}

/// A comparison stamped with the snapshot it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotComparison {
    pub snapshot: SnapshotId,
    #[serde(flatten)]
    pub table: ComparisonTable,
}
