use crate::mappable::Mappable;
use crate::mapper::Mapper;

use remap_core::expr::CompiledFn;
use remap_core::Result;

use std::marker::PhantomData;

/// Element-wise copying for sequences: `items.iter().copy_each(&mapper)
/// .to::<Dto>()` yields a lazy adaptor that maps every element with the
/// pair's cached compiled plan.
pub trait MapSequence: Sized {
    fn copy_each(self, mapper: &Mapper) -> SequenceCopy<'_, Self>;
}

impl<I: IntoIterator> MapSequence for I {
    fn copy_each(self, mapper: &Mapper) -> SequenceCopy<'_, Self> {
        SequenceCopy { iter: self, mapper }
    }
}

/// Intermediate of the sequence surface: holds the sequence until the
/// element target type is named.
pub struct SequenceCopy<'a, I> {
    iter: I,
    mapper: &'a Mapper,
}

impl<'a, I: IntoIterator> SequenceCopy<'a, I> {
    /// Finish the adaptor. Plan compilation happens here, once; iteration
    /// itself cannot hit a configuration error.
    pub fn to<'s, S, T>(self) -> Result<Mapped<'a, I::IntoIter, S, T>>
    where
        I: IntoIterator<Item = &'s S>,
        S: Mappable,
        T: Mappable,
    {
        let construct = self.mapper.construct_fn::<S, T>()?;
        Ok(Mapped {
            iter: self.iter.into_iter(),
            mapper: self.mapper,
            construct,
            _pair: PhantomData,
        })
    }
}

/// A lazy, restartable (when the underlying iterator is cloneable)
/// element-wise mapping over a sequence. Every element reuses the same
/// compiled per-element plan.
pub struct Mapped<'a, I, S, T> {
    iter: I,
    mapper: &'a Mapper,
    construct: CompiledFn,
    _pair: PhantomData<fn(&S) -> T>,
}

impl<'a, I, S, T> std::fmt::Debug for Mapped<'a, I, S, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mapped").finish_non_exhaustive()
    }
}

impl<'s, 'a, I, S, T> Iterator for Mapped<'a, I, S, T>
where
    I: Iterator<Item = &'s S>,
    S: Mappable,
    T: Mappable,
{
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let source = self.iter.next()?;
        Some(self.map_one(source))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, I, S: Mappable, T: Mappable> Mapped<'a, I, S, T> {
    fn map_one(&self, source: &S) -> Result<T> {
        let value = (*self.construct)(&source.to_value())?;
        let mut target = T::load(value)?;
        self.mapper.run_after_copy(source, &mut target);
        Ok(target)
    }
}

impl<'a, I: Clone, S, T> Clone for Mapped<'a, I, S, T> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            mapper: self.mapper,
            construct: self.construct.clone(),
            _pair: PhantomData,
        }
    }
}
