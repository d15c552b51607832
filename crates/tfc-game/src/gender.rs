use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// `true` maps to male.
    pub fn from_bool(value: bool) -> Self {
        if value {
            Gender::Male
        } else {
            Gender::Female
        }
    }

    /// Fair coin flip.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_bool(rng.gen_bool(0.5))
    }

    pub fn opposite(self) -> Self {
        match self {
            Gender::Male => Gender::Female,
            Gender::Female => Gender::Male,
        }
    }
}
