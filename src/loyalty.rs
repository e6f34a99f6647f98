// Loyalty program: a points balance redeemable in fixed blocks

use crate::config::LoyaltyConfig;
use crate::error::{require, DomainError, Result};
use serde::Deserialize;

pub const REWARD_REDEEMED: &str = "Reward redeemed!";
pub const NOT_ENOUGH_POINTS: &str = "Not enough points to redeem.";

#[derive(Debug, Clone, PartialEq)]
pub struct LoyaltyProgram {
    points_earned: i64,
    rewards: Vec<String>,
    config: LoyaltyConfig,
}

impl LoyaltyProgram {
    pub fn new(points_earned: i64, rewards: Vec<String>) -> Self {
        Self::with_config(points_earned, rewards, LoyaltyConfig::default())
    }

    pub fn with_config(points_earned: i64, rewards: Vec<String>, config: LoyaltyConfig) -> Self {
        Self {
            points_earned,
            rewards,
            config,
        }
    }

    pub fn get_points_earned(&self) -> i64 {
        self.points_earned
    }

    pub fn set_points_earned(&mut self, points: i64) {
        self.points_earned = points;
    }

    pub fn get_rewards(&self) -> &[String] {
        &self.rewards
    }

    pub fn set_rewards(&mut self, rewards: Vec<String>) {
        self.rewards = rewards;
    }

    pub fn redeem_points(&mut self) -> &'static str {
        let cost = self.config.cost();
        match self.points_earned.checked_sub(cost) {
            Some(remaining) if self.points_earned >= cost => {
                self.points_earned = remaining;
                tracing::debug!(cost, remaining, "points redeemed");
                REWARD_REDEEMED
            }
            _ => {
                tracing::debug!(balance = self.points_earned, cost, "not enough points");
                NOT_ENOUGH_POINTS
            }
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoyaltyProgramDraft {
    pub points_earned: Option<i64>,
    pub rewards: Option<Vec<String>>,
}

impl TryFrom<LoyaltyProgramDraft> for LoyaltyProgram {
    type Error = DomainError;

    fn try_from(draft: LoyaltyProgramDraft) -> Result<Self> {
        Ok(LoyaltyProgram::new(
            require(draft.points_earned, "LoyaltyProgram", "points_earned")?,
            require(draft.rewards, "LoyaltyProgram", "rewards")?,
        ))
    }
}
