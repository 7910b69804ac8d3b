use super::{DomainDef, build_domains};
use crate::protocol::DEFAULT_CEILING_THRESHOLD;
use crate::values::ScoreValueDomain;
use crate::Protocol;

/// VB-MAPP: Verbal Behavior Milestones Assessment and Placement Program.
/// Each skill area is one sequence of milestones running through Level 1
/// (0-18 months), Level 2 (18-30) and Level 3 (30-48), scored 0 / 0.5 / 1.
pub fn protocol() -> Protocol {
    const DOMAINS: &[DomainDef] = &[
        (
            "mand",
            "Mand",
            &[(
                "mand",
                "Mand Milestones",
                &[
                    (18, "Emits two words, signs or PECS requests"),
                    (18, "Requests five different missing items"),
                    (30, "Spontaneously emits 20 different mands"),
                    (30, "Mands for others to emit actions"),
                    (48, "Mands for verbal information using WH questions"),
                ],
            )],
        ),
        (
            "tact",
            "Tact",
            &[(
                "tact",
                "Tact Milestones",
                &[
                    (18, "Tacts two items"),
                    (18, "Tacts ten items"),
                    (30, "Tacts 50 two-component noun-verb combinations"),
                    (30, "Tacts ten actions"),
                    (48, "Tacts four prepositions and four pronouns"),
                ],
            )],
        ),
        (
            "listener_responding",
            "Listener Responding",
            &[(
                "listener",
                "Listener Milestones",
                &[
                    (18, "Attends to a speaker's voice"),
                    (18, "Selects the correct item from an array of four"),
                    (30, "Selects the correct item from an array of eight"),
                    (30, "Follows 50 two-component instructions"),
                    (48, "Selects items by color and shape"),
                ],
            )],
        ),
        (
            "visual_perceptual",
            "Visual Perceptual Skills and Match-to-Sample",
            &[(
                "vp",
                "VP-MTS Milestones",
                &[
                    (18, "Visually tracks a moving stimulus"),
                    (18, "Matches ten identical items"),
                    (30, "Matches 25 identical items in a cluttered array"),
                    (30, "Matches colors and shapes"),
                    (48, "Completes a 20-piece puzzle"),
                ],
            )],
        ),
        (
            "independent_play",
            "Independent Play",
            &[(
                "play",
                "Play Milestones",
                &[
                    (18, "Manipulates and explores objects"),
                    (18, "Engages in independent play for two minutes"),
                    (30, "Engages in pretend play"),
                    (30, "Engages in independent play for five minutes"),
                    (48, "Draws recognizable pictures"),
                ],
            )],
        ),
        (
            "social_behavior",
            "Social Behavior and Social Play",
            &[(
                "social",
                "Social Milestones",
                &[
                    (18, "Makes eye contact as a mand"),
                    (18, "Spontaneously follows peers"),
                    (30, "Initiates a physical interaction with a peer"),
                    (30, "Spontaneously mands to peers"),
                    (48, "Engages in sustained pretend play with a peer"),
                ],
            )],
        ),
        (
            "motor_imitation",
            "Motor Imitation",
            &[(
                "imitation",
                "Imitation Milestones",
                &[
                    (18, "Imitates two gross motor movements"),
                    (18, "Imitates eight motor movements"),
                    (30, "Imitates 20 actions with objects"),
                    (30, "Spontaneously imitates functional skills"),
                    (48, "Imitates a three-step sequence"),
                ],
            )],
        ),
        (
            "echoic",
            "Echoic",
            &[(
                "echoic",
                "Echoic Milestones",
                &[
                    (18, "Echoes two sounds"),
                    (18, "Echoes ten consonant-vowel combinations"),
                    (30, "Echoes two-word phrases"),
                    (30, "Echoes with intonation"),
                    (48, "Echoes three-word phrases"),
                ],
            )],
        ),
    ];

    Protocol {
        id: "vb_mapp".to_string(),
        name: "VB-MAPP".to_string(),
        values: ScoreValueDomain::milestone(),
        age_referenced: false,
        ceiling_threshold: DEFAULT_CEILING_THRESHOLD,
        domains: build_domains(DOMAINS),
        description: Some("Milestones Assessment, three levels, scored 0/0.5/1".to_string()),
    }
}
