use crate::state::{Poll, PollOption};

fn option(id: &str, text: &str, votes: Option<u64>) -> PollOption {
    PollOption {
        id: id.to_string(),
        text: text.to_string(),
        votes,
    }
}

/// Demonstration feed: one revealed poll followed by two that are still encrypting.
pub fn sample_polls() -> Vec<Poll> {
    vec![
        Poll {
            id: 1,
            question: "Which blockchain should we integrate next for our DeFi protocol?"
                .to_string(),
            options: vec![
                option("1a", "Arbitrum", Some(45)),
                option("1b", "Polygon", Some(32)),
                option("1c", "Optimism", Some(28)),
                option("1d", "Base", Some(19)),
            ],
            is_active: false,
            total_votes: 124,
            time_left: "Closed".to_string(),
            creator: "0x742d35Cc6ab".to_string(),
        },
        Poll {
            id: 2,
            question: "What's the most important feature for privacy-focused social media?"
                .to_string(),
            options: vec![
                option("2a", "End-to-end encryption", None),
                option("2b", "Anonymous posting", None),
                option("2c", "Decentralized moderation", None),
                option("2d", "Zero-knowledge proofs", None),
            ],
            is_active: true,
            total_votes: 67,
            time_left: "18h left".to_string(),
            creator: "0x9f2b5eA8c1d".to_string(),
        },
        Poll {
            id: 3,
            question: "Best programming language for Web3 development in 2024?".to_string(),
            options: vec![
                option("3a", "Solidity", None),
                option("3b", "Rust", None),
                option("3c", "Move", None),
                option("3d", "Cairo", None),
            ],
            is_active: true,
            total_votes: 89,
            time_left: "2d left".to_string(),
            creator: "0x1a4f7c9e8b2".to_string(),
        },
    ]
}
