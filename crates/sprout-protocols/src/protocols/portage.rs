use super::{DomainDef, build_domains};
use crate::protocol::DEFAULT_CEILING_THRESHOLD;
use crate::values::ScoreValueDomain;
use crate::Protocol;

/// Portage Guide: five developmental areas in yearly age brackets,
/// scored achieved / not achieved.
pub fn protocol() -> Protocol {
    const DOMAINS: &[DomainDef] = &[
        (
            "socialization",
            "Socialization",
            &[
                (
                    "soc-0-12",
                    "0-12 months",
                    &[
                        (3, "Smiles in response to an adult's attention"),
                        (8, "Reaches for a familiar person"),
                        (12, "Waves goodbye when prompted"),
                    ],
                ),
                (
                    "soc-12-24",
                    "12-24 months",
                    &[
                        (15, "Plays alongside another child"),
                        (18, "Hands a toy to an adult on request"),
                        (24, "Imitates adult household activities"),
                    ],
                ),
                (
                    "soc-24-36",
                    "24-36 months",
                    &[
                        (28, "Takes turns in a simple game with prompting"),
                        (32, "Says 'please' and 'thank you' when reminded"),
                        (36, "Shares toys with peers"),
                    ],
                ),
                (
                    "soc-36-48",
                    "36-48 months",
                    &[
                        (40, "Follows rules in a group game led by an adult"),
                        (44, "Asks permission before using another's belongings"),
                        (48, "Expresses feelings such as angry, happy, sad"),
                    ],
                ),
            ],
        ),
        (
            "language",
            "Language",
            &[
                (
                    "lang-0-12",
                    "0-12 months",
                    &[
                        (4, "Vocalizes in response to speech"),
                        (9, "Babbles repeated syllables"),
                        (12, "Says one word meaningfully"),
                    ],
                ),
                (
                    "lang-12-24",
                    "12-24 months",
                    &[
                        (15, "Points to a named body part"),
                        (20, "Names five familiar objects"),
                        (24, "Combines two words"),
                    ],
                ),
                (
                    "lang-24-36",
                    "24-36 months",
                    &[
                        (28, "Uses plurals"),
                        (32, "Answers 'what' questions"),
                        (36, "Tells own first name and age"),
                    ],
                ),
                (
                    "lang-36-48",
                    "36-48 months",
                    &[
                        (40, "Uses past tense for regular verbs"),
                        (44, "Relates an experience in sequence"),
                        (48, "Answers 'why' questions with an explanation"),
                    ],
                ),
            ],
        ),
        (
            "self_help",
            "Self-Help",
            &[
                (
                    "self-0-12",
                    "0-12 months",
                    &[
                        (5, "Takes food from a spoon"),
                        (9, "Feeds self finger foods"),
                        (12, "Holds and drinks from a cup with help"),
                    ],
                ),
                (
                    "self-12-24",
                    "12-24 months",
                    &[
                        (16, "Eats with a spoon, spilling some"),
                        (20, "Removes socks"),
                        (24, "Washes hands with help"),
                    ],
                ),
                (
                    "self-24-36",
                    "24-36 months",
                    &[
                        (28, "Puts on a coat with help"),
                        (32, "Indicates need to use the toilet"),
                        (36, "Pours from a small pitcher"),
                    ],
                ),
                (
                    "self-36-48",
                    "36-48 months",
                    &[
                        (40, "Dresses self except for fasteners"),
                        (44, "Brushes teeth with supervision"),
                        (48, "Buttons large buttons"),
                    ],
                ),
            ],
        ),
        (
            "cognition",
            "Cognition",
            &[
                (
                    "cog-0-12",
                    "0-12 months",
                    &[
                        (4, "Follows a moving object with eyes"),
                        (8, "Finds an object partially hidden"),
                        (12, "Places objects into a container"),
                    ],
                ),
                (
                    "cog-12-24",
                    "12-24 months",
                    &[
                        (16, "Points to a picture when named"),
                        (20, "Stacks three blocks on request"),
                        (24, "Matches objects by shape"),
                    ],
                ),
                (
                    "cog-24-36",
                    "24-36 months",
                    &[
                        (28, "Matches three colors"),
                        (32, "Names big and little objects"),
                        (36, "Counts to three in imitation"),
                    ],
                ),
                (
                    "cog-36-48",
                    "36-48 months",
                    &[
                        (40, "Names four colors"),
                        (44, "Sorts objects by category"),
                        (48, "Counts ten objects"),
                    ],
                ),
            ],
        ),
        (
            "motor",
            "Motor Development",
            &[
                (
                    "mot-0-12",
                    "0-12 months",
                    &[
                        (4, "Holds head steady when supported sitting"),
                        (7, "Sits without support"),
                        (12, "Walks with one hand held"),
                    ],
                ),
                (
                    "mot-12-24",
                    "12-24 months",
                    &[
                        (15, "Walks independently"),
                        (18, "Scribbles with a crayon"),
                        (24, "Kicks a ball forward"),
                    ],
                ),
                (
                    "mot-24-36",
                    "24-36 months",
                    &[
                        (28, "Jumps in place with both feet"),
                        (32, "Turns pages one at a time"),
                        (36, "Pedals a tricycle"),
                    ],
                ),
                (
                    "mot-36-48",
                    "36-48 months",
                    &[
                        (40, "Hops on one foot"),
                        (44, "Cuts along a straight line with scissors"),
                        (48, "Copies a circle"),
                    ],
                ),
            ],
        ),
    ];

    Protocol {
        id: "portage".to_string(),
        name: "Portage Guide".to_string(),
        values: ScoreValueDomain::two_state(),
        age_referenced: true,
        ceiling_threshold: DEFAULT_CEILING_THRESHOLD,
        domains: build_domains(DOMAINS),
        description: Some(
            "Developmental checklist, 0 to 6 years, achieved / not achieved".to_string(),
        ),
    }
}
