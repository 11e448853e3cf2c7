//! Static fracture knowledge base.
//!
//! Seven bone-fracture categories with the clinical display data the UI
//! renders. The table is fixed at compile time and never mutated; record
//! order doubles as matching precedence in detection.

use serde::Serialize;

/// Body region a fracture category belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    UpperBody,
    Spine,
    HeadFace,
}

impl Region {
    /// Returns a human-readable label for the region
    pub fn label(&self) -> &'static str {
        match self {
            Region::UpperBody => "Upper Body",
            Region::Spine => "Spine",
            Region::HeadFace => "Head/Face",
        }
    }
}

/// One bone-fracture category.
///
/// `id` is the stable identifier detection results carry; everything else
/// is display data for the results and education views.
#[derive(Debug, Serialize)]
pub struct FractureRecord {
    /// Stable identifier, unique across the table.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Body region the fracture sits in.
    pub region: Region,
    /// One-paragraph description.
    pub description: &'static str,
    /// Typical symptoms.
    pub symptoms: &'static [&'static str],
    /// Common causes.
    pub causes: &'static [&'static str],
    /// Typical treatment summary.
    pub treatment: &'static str,
    /// Expected recovery time.
    pub recovery_time: &'static str,
    /// Possible complications.
    pub complications: &'static [&'static str],
}

/// Words too generic to identify a category. A bare "fracture" trigger
/// would make every fracture-labelled image match the first record in the
/// table, so these never become triggers.
const GENERIC_TERMS: &[&str] = &["fracture", "fractures"];

static FRACTURE_TYPES: [FractureRecord; 7] = [
    FractureRecord {
        id: "clavicle",
        name: "Clavicle Fracture",
        region: Region::UpperBody,
        description: "A clavicle fracture (broken collarbone) is a common injury that happens when the bone between your shoulder blade and breastbone breaks.",
        symptoms: &[
            "Bone pain in shoulder or neck area",
            "Difficulty moving shoulder",
            "Bruising along clavicle",
            "Visible misalignment",
            "Skin tenting",
            "Swelling",
        ],
        causes: &[
            "Falls on shoulder or outstretched arm",
            "Sports collisions",
            "Car accidents",
            "Birth trauma",
        ],
        treatment: "Most heal with conservative treatment including immobilization with sling, pain relief, and physical therapy. Surgery may be needed if pieces move out of place.",
        recovery_time: "8-12 weeks for adults, 6-8 weeks for adolescents, 3-6 weeks for children",
        complications: &[
            "Persistent bone pain",
            "Bone deformity",
            "Calluses",
            "Frozen shoulder",
            "Joint pain",
        ],
    },
    FractureRecord {
        id: "shoulder",
        name: "Shoulder Fracture",
        region: Region::UpperBody,
        description: "Fractures involving the shoulder joint, including the proximal humerus, scapula, or glenoid.",
        symptoms: &[
            "Severe shoulder pain",
            "Limited range of motion",
            "Swelling",
            "Bruising",
        ],
        causes: &["Falls", "Sports injuries", "Motor vehicle accidents"],
        treatment: "Treatment varies from conservative management to surgical repair depending on fracture type and displacement.",
        recovery_time: "6-12 weeks depending on severity",
        complications: &["Stiffness", "Nerve damage", "Arthritis"],
    },
    FractureRecord {
        id: "humerus",
        name: "Humerus Fracture",
        region: Region::UpperBody,
        description: "Fracture of the upper arm bone, which can occur at the proximal end (near shoulder) or distal end (near elbow).",
        symptoms: &["Arm pain", "Swelling", "Inability to move arm", "Deformity"],
        causes: &["Falls", "Direct trauma", "Osteoporosis-related fractures"],
        treatment: "May require surgical fixation with plates, screws, or rods depending on location and severity.",
        recovery_time: "8-16 weeks",
        complications: &["Nerve injury", "Nonunion", "Infection"],
    },
    FractureRecord {
        id: "elbow",
        name: "Elbow Fracture",
        region: Region::UpperBody,
        description: "Fractures involving the elbow joint, including olecranon, radial head, or distal humerus fractures.",
        symptoms: &[
            "Elbow pain",
            "Swelling",
            "Limited movement",
            "Numbness in fingers",
        ],
        causes: &[
            "Falls on outstretched hand",
            "Direct blow to elbow",
            "Sports injuries",
        ],
        treatment: "Often requires surgical repair to restore joint function and alignment.",
        recovery_time: "6-12 weeks with extensive rehabilitation",
        complications: &["Stiffness", "Arthritis", "Nerve damage"],
    },
    FractureRecord {
        id: "rib",
        name: "Rib Fracture",
        region: Region::UpperBody,
        description: "Break in one or more ribs, commonly caused by blunt chest trauma.",
        symptoms: &[
            "Chest pain",
            "Pain when breathing",
            "Tenderness",
            "Shortness of breath",
        ],
        causes: &[
            "Motor vehicle accidents",
            "Falls",
            "Sports injuries",
            "Direct blows",
        ],
        treatment: "Usually conservative with pain management and breathing exercises. Surgery for severe cases.",
        recovery_time: "6-8 weeks",
        complications: &["Pneumonia", "Punctured lung", "Chronic pain"],
    },
    FractureRecord {
        id: "compression",
        name: "Compression Fracture",
        region: Region::Spine,
        description: "Vertebral compression fracture where the vertebra collapses due to pressure.",
        symptoms: &[
            "Back pain",
            "Loss of height",
            "Kyphosis (hunched posture)",
            "Limited mobility",
        ],
        causes: &["Osteoporosis", "Trauma", "Tumors", "Infection"],
        treatment: "Conservative treatment, vertebroplasty, or kyphoplasty depending on severity.",
        recovery_time: "8-12 weeks",
        complications: &[
            "Chronic pain",
            "Spinal deformity",
            "Neurological symptoms",
        ],
    },
    FractureRecord {
        id: "facial",
        name: "Facial Fracture",
        region: Region::HeadFace,
        description: "Fractures involving facial bones including nose, cheek, jaw, or orbital bones.",
        symptoms: &[
            "Facial pain",
            "Swelling",
            "Bruising",
            "Vision problems",
            "Difficulty chewing",
        ],
        causes: &["Motor vehicle accidents", "Sports injuries", "Falls", "Assault"],
        treatment: "May require surgical repair for functional and cosmetic restoration.",
        recovery_time: "4-8 weeks depending on location",
        complications: &["Nerve damage", "Scarring", "Functional impairment"],
    },
];

/// Returns every record in table (and matching precedence) order.
pub fn all() -> &'static [FractureRecord] {
    &FRACTURE_TYPES
}

/// Looks up a record by its exact id. Case-sensitive.
pub fn find(id: &str) -> Option<&'static FractureRecord> {
    FRACTURE_TYPES.iter().find(|record| record.id == id)
}

/// Keyword set detection matches a record on: the id, the display name
/// minus its generic words, and each remaining name token. Lowercased,
/// deduplicated, original order preserved.
pub fn trigger_terms(record: &FractureRecord) -> Vec<String> {
    let tokens: Vec<String> = record
        .name
        .to_lowercase()
        .split_whitespace()
        .filter(|token| !GENERIC_TERMS.contains(token))
        .map(str::to_string)
        .collect();

    let mut candidates = vec![record.id.to_lowercase(), tokens.join(" ")];
    candidates.extend(tokens);

    let mut terms: Vec<String> = Vec::new();
    for candidate in candidates {
        if !candidate.is_empty() && !terms.contains(&candidate) {
            terms.push(candidate);
        }
    }
    terms
}
