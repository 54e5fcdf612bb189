//! Teams of two and four-player matches.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{PairKey, Player};

/// Two distinct players, stored in sorted order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Team {
    players: [Player; 2],
}

impl Team {
    /// Creates a team; the two players are stored sorted.
    pub fn new(a: Player, b: Player) -> Self {
        if a <= b {
            Self { players: [a, b] }
        } else {
            Self { players: [b, a] }
        }
    }

    /// Both players, in canonical order.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The teammate pair key.
    pub fn pair_key(&self) -> PairKey {
        PairKey::new(&self.players[0], &self.players[1])
    }

    /// Whether `player` is on this team.
    pub fn contains(&self, player: &Player) -> bool {
        self.players.contains(player)
    }

    /// Comma-joined names, used to order teams within a match.
    fn joined(&self) -> String {
        format!("{},{}", self.players[0], self.players[1])
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} & {}", self.players[0], self.players[1])
    }
}

/// Two disjoint teams facing each other.
///
/// The team with the smaller comma-joined name is listed first. The order is
/// for display stability only and carries no scoring meaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Match {
    teams: [Team; 2],
}

impl Match {
    /// Creates a match, ordering the two teams for display.
    pub fn new(t1: Team, t2: Team) -> Self {
        if t2.joined() < t1.joined() {
            Self { teams: [t2, t1] }
        } else {
            Self { teams: [t1, t2] }
        }
    }

    /// Both teams in display order.
    pub fn teams(&self) -> &[Team; 2] {
        &self.teams
    }

    /// All four players, team by team.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.teams.iter().flat_map(|t| t.players().iter())
    }

    /// The four cross-team opponent pairs.
    pub fn opponent_pairs(&self) -> Vec<PairKey> {
        let [t1, t2] = &self.teams;
        let mut pairs = Vec::with_capacity(4);
        for x in t1.players() {
            for y in t2.players() {
                pairs.push(PairKey::new(x, y));
            }
        }
        pairs
    }

    /// Whether `player` takes part in this match.
    pub fn contains(&self, player: &Player) -> bool {
        self.teams.iter().any(|t| t.contains(player))
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.teams[0], self.teams[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(name: &str) -> Player {
        Player::new(name)
    }

    #[test]
    fn test_team_sorted() {
        let t = Team::new(p("zed"), p("amy"));
        assert_eq!(t.players()[0].as_str(), "amy");
        assert_eq!(t.players()[1].as_str(), "zed");
        assert_eq!(t.to_string(), "amy & zed");
    }

    #[test]
    fn test_match_orders_teams() {
        let m = Match::new(Team::new(p("d"), p("c")), Team::new(p("b"), p("a")));
        assert_eq!(m.to_string(), "a & b vs c & d");
    }

    #[test]
    fn test_opponent_pairs() {
        let m = Match::new(Team::new(p("a"), p("b")), Team::new(p("c"), p("d")));
        let pairs = m.opponent_pairs();
        assert_eq!(pairs.len(), 4);
        assert!(pairs.contains(&PairKey::new(&p("d"), &p("a"))));
        assert!(!pairs.contains(&PairKey::new(&p("a"), &p("b"))));
    }

    #[test]
    fn test_match_players() {
        let m = Match::new(Team::new(p("a"), p("b")), Team::new(p("c"), p("d")));
        let names: Vec<&str> = m.players().map(|x| x.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c", "d"]);
        assert!(m.contains(&p("c")));
        assert!(!m.contains(&p("e")));
    }
}
