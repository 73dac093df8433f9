use crate::mappable::Mappable;
use crate::mapper::Mapper;
use remap_core::Result;

/// The entry point of a fluent copy: holds the source instance until the
/// target type is named.
pub struct CopyFrom<'a, S> {
    mapper: &'a Mapper,
    source: &'a S,
    scalar_only: bool,
}

impl<'a, S: Mappable> CopyFrom<'a, S> {
    pub(crate) fn new(mapper: &'a Mapper, source: &'a S, scalar_only: bool) -> Self {
        Self {
            mapper,
            source,
            scalar_only,
        }
    }

    /// Construct a new target instance with members copied from the source.
    pub fn to<T: Mappable>(self) -> Result<T> {
        if self.scalar_only {
            self.mapper.set_scalar_only::<S, T>();
        }
        self.mapper.map(self.source)
    }

    /// As [`CopyFrom::to`], then run the given closure on the new instance.
    pub fn to_with<T: Mappable>(self, after: impl FnOnce(&mut T)) -> Result<T> {
        let mut target = self.to()?;
        after(&mut target);
        Ok(target)
    }

    /// Populate an existing target instance. Members the plan does not bind
    /// keep their current values.
    pub fn to_existing<T: Mappable>(self, target: &mut T) -> Result<()> {
        if self.scalar_only {
            self.mapper.set_scalar_only::<S, T>();
        }
        self.mapper.map_into(self.source, target)
    }
}
