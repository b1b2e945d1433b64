use crate::base;

/// Returns a store anchored at a fresh temporary directory. The `Store` must
/// not outlive the returned `TempDir`.
pub fn tempstore() -> (base::Store, tempfile::TempDir) {
    let td = tempfile::TempDir::new().unwrap();
    let store = base::Store::new(td.path());
    (store, td)
}

/// The expected or actual objects deserialized from a store directory. Unset
/// fields correspond to nonexistent files.
#[derive(Debug, PartialEq, Eq, Default)]
pub struct State {
    config: Option<base::Config>,
    history: Option<base::History>,
}

impl State {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store's [`base::Config`].
    pub fn with_config<T>(mut self, config: T) -> Self
    where
        T: TryInto<base::Config> + std::fmt::Debug,
        <T as TryInto<base::Config>>::Error: std::fmt::Debug,
    {
        self.config = Some(config.try_into().unwrap());
        self
    }

    /// Sets the store's [`base::History`].
    pub fn with_history<T>(mut self, history: T) -> Self
    where
        T: TryInto<base::History> + std::fmt::Debug,
        <T as TryInto<base::History>>::Error: std::fmt::Debug,
    {
        self.history = Some(history.try_into().unwrap());
        self
    }

    /// Deserializes objects from `store`.
    pub fn from_store(store: &base::Store) -> Self {
        macro_rules! read {
            ($t:ty) => {{
                let p = store.path::<$t>();
                if p.exists() {
                    Some(store.read::<$t>().unwrap())
                } else {
                    None
                }
            }};
        }

        Self {
            config: read!(base::Config),
            history: read!(base::History),
        }
    }
}

/// Representation of a store directory's file contents. Unset fields
/// correspond to nonexistent files.
#[derive(Default)]
pub struct StrState<'a> {
    config: Option<&'a str>,
    history: Option<&'a str>,
}

impl<'a> StrState<'a> {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store's [`base::Config`] file contents.
    pub fn with_config(mut self, s: &'a str) -> Self {
        self.config = Some(s);
        self
    }

    /// Sets the store's [`base::History`] file contents.
    pub fn with_history(mut self, s: &'a str) -> Self {
        self.history = Some(s);
        self
    }

    /// Writes string contents verbatim to `store`'s directory. Panics if any
    /// field is not a valid serialization of a real type.
    pub fn to_store(&self, store: &base::Store) {
        fn write<T>(store: &base::Store, field: Option<&str>)
        where
            T: std::fmt::Debug + base::store::Keyed,
            <T as std::str::FromStr>::Err: std::fmt::Debug,
        {
            if let Some(s) = field {
                let obj = s.parse::<T>();
                assert!(obj.is_ok(), "{:?}", obj);
                std::fs::write(store.path::<T>(), s).unwrap()
            }
        }

        write::<base::Config>(store, self.config);
        write::<base::History>(store, self.history);
    }

    pub fn to_state(&self) -> State {
        let mut os = State::new();
        if let Some(s) = self.config {
            os = os.with_config(s);
        }
        if let Some(s) = self.history {
            os = os.with_history(s);
        }
        os
    }
}
