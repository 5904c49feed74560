//! Minimal compile-time dependency injection.
//!
//! A provider (see [`provider!`]) owns the leaf values of the dependency graph,
//! usually configuration and connections. Every other service derives
//! [`Build`] and is assembled from its fields on demand. Built services are
//! cached in the provider, so each type is constructed at most once.

pub use relay_di_derive::Build;
pub use typemap::TypeMap;

mod macros;
mod typemap;

pub trait Provider: Sized {
    fn cache(&mut self) -> &mut TypeMap;

    fn get<T: 'static + Clone>(&mut self) -> Option<T> {
        self.cache().get().cloned()
    }

    fn insert<T: 'static>(&mut self, value: T) {
        self.cache().insert(value);
    }
}

#[diagnostic::on_unimplemented(
    message = "The type `{Self}` cannot be built using the provider `{P}`",
    note = "Add `{Self}` to the provider `{P}` or implement `Build` for `{Self}` and make sure \
            all dependencies are satisfied"
)]
pub trait Build<P: Provider>: Clone + 'static {
    fn build(provider: &mut P) -> Self;
}

pub trait Provide: Provider {
    fn provide<T: Build<Self>>(&mut self) -> T {
        T::build(self)
    }
}

impl<P: Provider> Provide for P {}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use super::*;

    #[derive(Debug, Clone)]
    struct Config(Arc<AtomicUsize>);

    #[derive(Debug, Clone)]
    struct Service {
        config: Config,
    }

    impl<P: Provider> Build<P> for Service
    where
        Config: Build<P>,
    {
        fn build(provider: &mut P) -> Self {
            if let Some(cached) = provider.get() {
                return cached;
            }
            let config = Config::build(provider);
            config.0.fetch_add(1, Ordering::Relaxed);
            let service = Self { config };
            provider.insert(service.clone());
            service
        }
    }

    crate::provider! {
        TestProvider { config: Config, }
    }

    #[test]
    fn provide_caches_built_services() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut provider = TestProvider {
            _cache: Default::default(),
            config: Config(Arc::clone(&counter)),
        };

        let a: Service = provider.provide();
        let b: Service = provider.provide();

        assert_eq!(counter.load(Ordering::Relaxed), 1);
        assert!(Arc::ptr_eq(&a.config.0, &b.config.0));
    }
}
