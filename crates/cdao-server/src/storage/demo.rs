//! Static seed data for the sales dashboard demo
//!
//! These records have no create path. Both backends serve the same fixtures,
//! defined once here.

use cdao_types::{Activity, Deal, Metric};

pub(crate) fn deals() -> Vec<Deal> {
    vec![
        Deal {
            id: 1,
            client: "Nordwind Labs".to_string(),
            title: "Genomics platform license".to_string(),
            amount: 48_000,
            stage: "Negotiation".to_string(),
            owner: "Maya Chen".to_string(),
        },
        Deal {
            id: 2,
            client: "Helix Health".to_string(),
            title: "Data partnership renewal".to_string(),
            amount: 32_500,
            stage: "Proposal".to_string(),
            owner: "Tom Okafor".to_string(),
        },
        Deal {
            id: 3,
            client: "BrightPath Clinic".to_string(),
            title: "Screening pilot".to_string(),
            amount: 12_000,
            stage: "Qualified".to_string(),
            owner: "Maya Chen".to_string(),
        },
        Deal {
            id: 4,
            client: "Aster Biotech".to_string(),
            title: "Research collaboration".to_string(),
            amount: 76_000,
            stage: "Closed Won".to_string(),
            owner: "Lena Fischer".to_string(),
        },
    ]
}

pub(crate) fn metrics() -> Vec<Metric> {
    vec![
        Metric {
            id: 1,
            label: "Pipeline value".to_string(),
            value: "$168,500".to_string(),
            change: "+12%".to_string(),
        },
        Metric {
            id: 2,
            label: "Open deals".to_string(),
            value: "3".to_string(),
            change: "+1".to_string(),
        },
        Metric {
            id: 3,
            label: "Win rate".to_string(),
            value: "38%".to_string(),
            change: "-2%".to_string(),
        },
        Metric {
            id: 4,
            label: "New subscribers".to_string(),
            value: "214".to_string(),
            change: "+34".to_string(),
        },
    ]
}

pub(crate) fn activities() -> Vec<Activity> {
    vec![
        Activity {
            id: 1,
            actor: "Maya Chen".to_string(),
            action: "moved Genomics platform license to Negotiation".to_string(),
            occurred: "2h ago".to_string(),
        },
        Activity {
            id: 2,
            actor: "Tom Okafor".to_string(),
            action: "logged a call with Helix Health".to_string(),
            occurred: "5h ago".to_string(),
        },
        Activity {
            id: 3,
            actor: "Lena Fischer".to_string(),
            action: "closed Research collaboration".to_string(),
            occurred: "1d ago".to_string(),
        },
        Activity {
            id: 4,
            actor: "Maya Chen".to_string(),
            action: "created Screening pilot".to_string(),
            occurred: "2d ago".to_string(),
        },
        Activity {
            id: 5,
            actor: "Tom Okafor".to_string(),
            action: "sent proposal to Helix Health".to_string(),
            occurred: "3d ago".to_string(),
        },
    ]
}
