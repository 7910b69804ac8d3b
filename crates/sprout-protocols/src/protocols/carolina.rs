use super::{DomainDef, build_domains};
use crate::protocol::DEFAULT_CEILING_THRESHOLD;
use crate::values::ScoreValueDomain;
use crate::Protocol;

/// Carolina Curriculum: skill sequences grouped by developmental domain,
/// scored absent / emerging / mastered.
pub fn protocol() -> Protocol {
    const DOMAINS: &[DomainDef] = &[
        (
            "cognition",
            "Cognition",
            &[
                (
                    "car-cog-attention",
                    "Attention and Memory",
                    &[
                        (3, "Looks at an object held in midline"),
                        (6, "Shifts gaze between two objects"),
                        (9, "Watches a toy fall and looks for it"),
                        (12, "Remembers where an object was hidden after a delay"),
                    ],
                ),
                (
                    "car-cog-concepts",
                    "Concepts",
                    &[
                        (18, "Matches identical objects"),
                        (24, "Identifies big and little"),
                        (30, "Sorts by color"),
                        (36, "Understands the concept of one"),
                    ],
                ),
            ],
        ),
        (
            "communication",
            "Communication",
            &[
                (
                    "car-com-receptive",
                    "Receptive Language",
                    &[
                        (6, "Turns toward a voice"),
                        (10, "Responds to own name"),
                        (14, "Follows a one-step command with gesture"),
                        (20, "Follows a one-step command without gesture"),
                    ],
                ),
                (
                    "car-com-expressive",
                    "Expressive Language",
                    &[
                        (8, "Babbles with intonation"),
                        (12, "Uses one word consistently"),
                        (18, "Uses ten words"),
                        (24, "Uses two-word phrases"),
                    ],
                ),
            ],
        ),
        (
            "social_adaptation",
            "Personal-Social",
            &[
                (
                    "car-soc-interaction",
                    "Social Interaction",
                    &[
                        (2, "Smiles socially"),
                        (8, "Plays peek-a-boo"),
                        (14, "Shows a toy to an adult"),
                        (24, "Engages in parallel play"),
                    ],
                ),
                (
                    "car-soc-self-care",
                    "Self-Care",
                    &[
                        (9, "Feeds self a cracker"),
                        (15, "Drinks from a cup"),
                        (21, "Uses a spoon with little spilling"),
                        (30, "Removes unfastened garments"),
                    ],
                ),
            ],
        ),
        (
            "fine_motor",
            "Fine Motor",
            &[
                (
                    "car-fm-grasp",
                    "Grasp and Release",
                    &[
                        (4, "Holds a rattle placed in hand"),
                        (7, "Transfers an object hand to hand"),
                        (10, "Uses a pincer grasp"),
                        (13, "Releases an object into a container"),
                    ],
                ),
                (
                    "car-fm-manipulation",
                    "Manipulation",
                    &[
                        (15, "Builds a tower of two blocks"),
                        (20, "Turns a doorknob"),
                        (26, "Strings large beads"),
                        (33, "Snips paper with scissors"),
                    ],
                ),
            ],
        ),
        (
            "gross_motor",
            "Gross Motor",
            &[
                (
                    "car-gm-prone",
                    "Prone and Sitting",
                    &[
                        (3, "Lifts head while prone"),
                        (5, "Rolls from stomach to back"),
                        (7, "Sits independently"),
                        (9, "Crawls on hands and knees"),
                    ],
                ),
                (
                    "car-gm-upright",
                    "Upright Mobility",
                    &[
                        (12, "Walks with hands held"),
                        (15, "Walks independently"),
                        (21, "Walks up stairs with support"),
                        (30, "Jumps with both feet"),
                    ],
                ),
            ],
        ),
    ];

    Protocol {
        id: "carolina".to_string(),
        name: "Carolina Curriculum".to_string(),
        values: ScoreValueDomain::three_state(),
        age_referenced: true,
        ceiling_threshold: DEFAULT_CEILING_THRESHOLD,
        domains: build_domains(DOMAINS),
        description: Some(
            "Curriculum-based assessment, 0 to 36 months, absent / emerging / mastered"
                .to_string(),
        ),
    }
}
