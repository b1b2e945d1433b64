use crate::base::Config;
use crate::base::History;

/// String-keyed persistence collaborator, backed by a directory where each
/// well-known key is a file.
pub struct Store {
    dir: std::path::PathBuf,
}

/// Marker for types persisted under a well-known key.
pub trait Keyed: Default + ToString + std::str::FromStr {
    const KEY: &'static str;
}
impl Keyed for Config {
    const KEY: &'static str = "aqualog.json";
}
impl Keyed for History {
    const KEY: &'static str = "consumptionHistory";
}

impl Store {
    pub fn new<P>(dir: P) -> Self
    where
        P: Into<std::path::PathBuf>,
    {
        Self { dir: dir.into() }
    }

    /// Returns the directory backing the store.
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    /// The config file doubles as the initialization marker.
    pub fn is_initialized(&self) -> bool {
        self.path::<Config>().is_file()
    }

    /// Returns the path which `T` will be serialized to and deserialized from.
    pub fn path<T>(&self) -> std::path::PathBuf
    where
        T: Keyed,
    {
        self.dir.join(T::KEY)
    }

    /// Deserializes `T` from its key. An absent key yields `T::default()`,
    /// so an `Err` always means a real failure, never mere emptiness.
    pub fn read<T>(&self) -> Result<T, ReadError>
    where
        T: Keyed,
        <T as std::str::FromStr>::Err: std::error::Error + Send + Sync + 'static,
    {
        match std::fs::read_to_string(self.path::<T>()) {
            Ok(s) => s
                .parse()
                .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)
                .map_err(ReadError::Serde),
            Err(e) => match e.kind() {
                std::io::ErrorKind::NotFound => Ok(T::default()),
                _ => Err(ReadError::Io(e)),
            },
        }
    }

    pub fn write<T>(&self, obj: &T) -> std::io::Result<()>
    where
        T: Keyed,
    {
        std::fs::write(self.path::<T>(), obj.to_string())
    }

    /// Removes `T`'s key. Removing an absent key is not an error.
    pub fn remove<T>(&self) -> std::io::Result<()>
    where
        T: Keyed,
    {
        match std::fs::remove_file(self.path::<T>()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    // Boxed because each Keyed type brings its own parse error type.
    #[error(transparent)]
    Serde(#[from] Box<dyn std::error::Error + Send + Sync>),
}
