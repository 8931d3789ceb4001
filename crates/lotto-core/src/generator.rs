use crate::lotto::Ticket;

pub enum Generator {
    Uniform { seed: Option<u64> },
}

impl AsRef<Self> for Generator {
    fn as_ref(&self) -> &Self {
        self
    }
}

impl Generator {
    pub fn create_generator(generator: impl AsRef<Self>) -> Box<dyn NumberGenerator> {
        match generator.as_ref() {
            Self::Uniform { seed: Some(seed) } => {
                Box::new(uniform::UniformGenerator::seeded(*seed))
            }
            Self::Uniform { seed: None } => Box::new(uniform::UniformGenerator::from_entropy()),
        }
    }
}

/// Source of automatically picked tickets.
pub trait NumberGenerator {
    fn generate(&mut self) -> Ticket;

    fn generate_many(&mut self, count: usize) -> Vec<Ticket> {
        (0..count).map(|_| self.generate()).collect()
    }
}

pub mod uniform;
