//! `ore` namespace — Object Reuse and Exchange terms used in ProvONE constructs.
//!
//! ORE describes aggregations of web resources (resource maps, proxies).
//! Only the subset of the ontology relevant to DataONE's ProvONE packaging
//! is tabled here.

use crate::model::{Predicate, Resource, Vocabulary};

/// Namespace URI shared by every ORE term.
pub const NAMESPACE: &str = "http://www.openarchives.org/ore/terms/";

/// Conventional short prefix for [`NAMESPACE`].
pub const PREFIX: &str = "ore";

static ORE: Vocabulary = Vocabulary {
    prefix: PREFIX,
    namespace: NAMESPACE,
    classes: &["Aggregation", "AggregatedResource", "Proxy", "ResourceMap"],
    properties: &[
        "aggregates",
        "isAggregatedBy",
        "describes",
        "isDescribedBy",
        "lineage",
        "proxyFor",
        "proxyIn",
        "similarTo",
    ],
};

/// Returns the ORE vocabulary table.
#[must_use]
pub fn vocabulary() -> &'static Vocabulary {
    &ORE
}

/// `ore:Aggregation` — a set of aggregated resources.
#[must_use]
pub fn aggregation() -> Resource {
    ORE.resource("Aggregation")
}

/// `ore:AggregatedResource` — a resource grouped into an aggregation.
#[must_use]
pub fn aggregated_resource() -> Resource {
    ORE.resource("AggregatedResource")
}

/// `ore:Proxy` — an aggregated resource in the context of one aggregation.
#[must_use]
pub fn proxy() -> Resource {
    ORE.resource("Proxy")
}

/// `ore:ResourceMap` — a description of an aggregation.
#[must_use]
pub fn resource_map() -> Resource {
    ORE.resource("ResourceMap")
}

/// `ore:aggregates` — aggregation to aggregated resource.
#[must_use]
pub fn aggregates() -> Predicate {
    ORE.property("aggregates")
}

/// `ore:isAggregatedBy` — inverse of [`aggregates`].
#[must_use]
pub fn is_aggregated_by() -> Predicate {
    ORE.property("isAggregatedBy")
}

/// `ore:describes` — resource map to the aggregation it describes.
#[must_use]
pub fn describes() -> Predicate {
    ORE.property("describes")
}

/// `ore:isDescribedBy` — inverse of [`describes`].
#[must_use]
pub fn is_described_by() -> Predicate {
    ORE.property("isDescribedBy")
}

/// `ore:lineage` — proxy to a prior proxy in the same lineage.
#[must_use]
pub fn lineage() -> Predicate {
    ORE.property("lineage")
}

/// `ore:proxyFor` — proxy to the aggregated resource it stands for.
#[must_use]
pub fn proxy_for() -> Predicate {
    ORE.property("proxyFor")
}

/// `ore:proxyIn` — proxy to the aggregation it belongs to.
#[must_use]
pub fn proxy_in() -> Predicate {
    ORE.property("proxyIn")
}

/// `ore:similarTo` — aggregation to a similar external resource.
#[must_use]
pub fn similar_to() -> Predicate {
    ORE.property("similarTo")
}
