use super::{DomainDef, build_domains};
use crate::protocol::DEFAULT_CEILING_THRESHOLD;
use crate::values::ScoreValueDomain;
use crate::Protocol;

/// ABLLS-R: Assessment of Basic Language and Learning Skills, Revised.
/// Lettered skill domains, scored 0-4. Not age-referenced.
pub fn protocol() -> Protocol {
    // Basic Learner Skills (A-N). Item ages carry no norm; they stay 0.
    const DOMAINS: &[DomainDef] = &[
        (
            "domain_a",
            "A. Cooperation and Reinforcer Effectiveness",
            &[(
                "a",
                "Cooperation",
                &[
                    (0, "Takes an offered reinforcer"),
                    (0, "Approaches the instructor"),
                    (0, "Responds to the instructor's name call"),
                ],
            )],
        ),
        (
            "domain_b",
            "B. Visual Performance",
            &[(
                "b",
                "Visual Performance",
                &[
                    (0, "Completes an inset puzzle"),
                    (0, "Matches identical objects"),
                    (0, "Matches pictures to objects"),
                ],
            )],
        ),
        (
            "domain_c",
            "C. Receptive Language",
            &[(
                "c",
                "Receptive Language",
                &[
                    (0, "Responds to own name"),
                    (0, "Follows instructions to do an enjoyable activity"),
                    (0, "Touches body parts on request"),
                ],
            )],
        ),
        (
            "domain_d",
            "D. Motor Imitation",
            &[(
                "d",
                "Motor Imitation",
                &[
                    (0, "Imitates motor movements with objects"),
                    (0, "Imitates gross motor movements"),
                    (0, "Imitates a sequence of two movements"),
                ],
            )],
        ),
        (
            "domain_e",
            "E. Vocal Imitation",
            &[(
                "e",
                "Vocal Imitation",
                &[
                    (0, "Imitates sounds on request"),
                    (0, "Imitates words on request"),
                    (0, "Imitates two-word phrases"),
                ],
            )],
        ),
        (
            "domain_f",
            "F. Requests",
            &[(
                "f",
                "Requests",
                &[
                    (0, "Requests by indicating"),
                    (0, "Requests reinforcers by name when present"),
                    (0, "Requests missing items needed for a task"),
                ],
            )],
        ),
        (
            "domain_g",
            "G. Labeling",
            &[(
                "g",
                "Labeling",
                &[
                    (0, "Labels reinforcers"),
                    (0, "Labels common objects"),
                    (0, "Labels pictures of common objects"),
                ],
            )],
        ),
        (
            "domain_h",
            "H. Intraverbals",
            &[(
                "h",
                "Intraverbals",
                &[
                    (0, "Fills in words from songs"),
                    (0, "Says animal sounds"),
                    (0, "Answers simple social questions"),
                ],
            )],
        ),
        (
            "domain_i",
            "I. Spontaneous Vocalizations",
            &[(
                "i",
                "Spontaneous Vocalizations",
                &[
                    (0, "Vocalizes spontaneously"),
                    (0, "Spontaneously labels items"),
                    (0, "Spontaneously requests"),
                ],
            )],
        ),
        (
            "domain_j",
            "J. Syntax and Grammar",
            &[(
                "j",
                "Syntax and Grammar",
                &[
                    (0, "Uses two-word combinations"),
                    (0, "Uses noun-verb combinations"),
                    (0, "Uses plurals"),
                ],
            )],
        ),
        (
            "domain_k",
            "K. Play and Leisure",
            &[(
                "k",
                "Play and Leisure",
                &[
                    (0, "Explores toys in the environment"),
                    (0, "Plays with cause-and-effect toys"),
                    (0, "Engages in pretend play"),
                ],
            )],
        ),
        (
            "domain_l",
            "L. Social Interaction",
            &[(
                "l",
                "Social Interaction",
                &[
                    (0, "Approaches others for reinforcement"),
                    (0, "Follows a peer's lead"),
                    (0, "Shares items with peers"),
                ],
            )],
        ),
        (
            "domain_m",
            "M. Group Instruction",
            &[(
                "m",
                "Group Instruction",
                &[
                    (0, "Sits in a group without disruption"),
                    (0, "Attends to the teacher in a group"),
                    (0, "Responds to group instructions"),
                ],
            )],
        ),
        (
            "domain_n",
            "N. Classroom Routines",
            &[(
                "n",
                "Classroom Routines",
                &[
                    (0, "Follows a classroom routine with prompts"),
                    (0, "Transitions between activities"),
                    (0, "Lines up with the class"),
                ],
            )],
        ),
    ];

    Protocol {
        id: "ablls_r".to_string(),
        name: "ABLLS-R".to_string(),
        values: ScoreValueDomain::rating(),
        age_referenced: false,
        ceiling_threshold: DEFAULT_CEILING_THRESHOLD,
        domains: build_domains(DOMAINS),
        description: Some("Basic learner skills, scored 0-4".to_string()),
    }
}
