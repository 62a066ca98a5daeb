use crate::{Game, GameSummary, RngState};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, RwLock};

const RECENT_LIMIT: usize = 10;

/// Live games by id. Each game sits behind its own mutex so moves on one id
/// serialize while requests for distinct ids proceed in parallel; the outer
/// map lock is only held for lookup and insert.
#[derive(Debug)]
pub struct GameRegistry {
    games: RwLock<HashMap<String, Arc<Mutex<Game>>>>,
    recent: Mutex<VecDeque<String>>,
    rng: Mutex<RngState>,
}

impl GameRegistry {
    pub fn new() -> Self {
        Self::with_rng(RngState::from_entropy())
    }

    pub fn with_rng(rng: RngState) -> Self {
        Self {
            games: RwLock::new(HashMap::new()),
            recent: Mutex::new(VecDeque::new()),
            rng: Mutex::new(rng),
        }
    }

    /// Creates a freshly dealt game and returns its id together with the
    /// shared handle.
    pub fn create(&self) -> (String, Arc<Mutex<Game>>) {
        let (id, seed) = {
            let mut rng = self.rng.lock().unwrap();
            (format!("{:08x}", rng.next_u64() as u32), rng.next_u64())
        };
        let game = Arc::new(Mutex::new(Game::new(id.clone(), seed)));
        self.games
            .write()
            .unwrap()
            .insert(id.clone(), game.clone());
        let mut recent = self.recent.lock().unwrap();
        recent.push_back(id.clone());
        while recent.len() > RECENT_LIMIT {
            recent.pop_front();
        }
        (id, game)
    }

    /// Not-found is a signal, not an error; stale ids mean the client should
    /// start a new game.
    pub fn get(&self, id: &str) -> Option<Arc<Mutex<Game>>> {
        self.games.read().unwrap().get(id).cloned()
    }

    pub fn delete(&self, id: &str) -> bool {
        let removed = self.games.write().unwrap().remove(id).is_some();
        if removed {
            self.recent.lock().unwrap().retain(|recent| recent != id);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.games.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.read().unwrap().is_empty()
    }

    pub fn summaries(&self) -> Vec<GameSummary> {
        let games = self.games.read().unwrap();
        let mut summaries: Vec<_> = games
            .iter()
            .map(|(id, game)| {
                let game = game.lock().unwrap();
                GameSummary {
                    game_id: id.clone(),
                    moves: game.moves,
                    game_won: game.is_won(),
                    foundations_complete: game.foundations_complete(),
                }
            })
            .collect();
        summaries.sort_by(|a, b| a.game_id.cmp(&b.game_id));
        summaries
    }

    /// The most recently created ids, oldest first.
    pub fn recent(&self, count: usize) -> Vec<String> {
        let recent = self.recent.lock().unwrap();
        recent
            .iter()
            .skip(recent.len().saturating_sub(count))
            .cloned()
            .collect()
    }
}

impl Default for GameRegistry {
    fn default() -> Self {
        Self::new()
    }
}
