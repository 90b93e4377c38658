use rand::seq::SliceRandom;
use rand::Rng;

pub const COMMENTS: [&str; 7] = [
    "Meow! I'm making a purrfect move!",
    "Paws and think... Done!",
    "This will be a claw-some win!",
    "Let's see if you can handle my feline finesse!",
    "I'm pouncing on this move!",
    "My whiskers are twitching for victory!",
    "Watch out! Here comes the cat's paw!",
];

/// Flavor text printed after each of the opponent's moves.
pub struct Taunts<R> {
    rng: R,
}

impl<R: Rng> Taunts<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn pick(&mut self) -> &'static str {
        COMMENTS.choose(&mut self.rng).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pick_comes_from_the_list() {
        let mut taunts = Taunts::new(StdRng::seed_from_u64(1));
        for _ in 0..50 {
            assert!(COMMENTS.contains(&taunts.pick()));
        }
    }

    #[test]
    fn test_lines() {
        assert_eq!(COMMENTS.first(), Some(&"Meow! I'm making a purrfect move!"));
        assert_eq!(COMMENTS.last(), Some(&"Watch out! Here comes the cat's paw!"));
        assert!(COMMENTS.iter().all(|line| !line.is_empty()));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Taunts::new(StdRng::seed_from_u64(42));
        let mut b = Taunts::new(StdRng::seed_from_u64(42));
        let first: Vec<_> = (0..10).map(|_| a.pick()).collect();
        let second: Vec<_> = (0..10).map(|_| b.pick()).collect();
        assert_eq!(first, second);
    }
}
