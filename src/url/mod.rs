//! URL handling module for Gossamer
//!
//! This module provides URL normalization, registered-domain matching, and
//! link partitioning (crawlable pages vs downloadable assets).

mod domain;
mod links;
mod normalize;

pub use domain::{domain_label, registered_domain, same_registered_domain};
pub use links::{asset_extension, partition_links, LinkPartition};
pub use normalize::normalize_url;
