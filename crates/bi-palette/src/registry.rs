//! Color model registry
//!
//! Decoders find the model that produced a stream by the name in its header.
//! [`ModelRegistry`] holds those name-to-model bindings. It is an ordinary
//! value: callers build one, optionally register their own models, and pass it
//! to the decoder. Nothing is global.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::model::{ColorModel, HexModel, NamedPaletteModel};

/// Longest model name whose header line `bi,<name>\n` fits in 128 bytes.
pub const MAX_MODEL_NAME_LEN: usize = 124;

/// Error type for model registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A model with this name is already registered
    DuplicateModel(String),
    /// The name is empty, too long for the header, or holds a `,`, `\n` or `\r`
    InvalidModelName(String),
}

/// Check that `name` can be written into a stream header and read back.
///
/// # Errors
///
/// Returns [`RegistryError::InvalidModelName`] if the name is empty, longer
/// than [`MAX_MODEL_NAME_LEN`] bytes, or contains a `,`, `\n` or `\r`.
pub fn validate_model_name(name: &str) -> Result<(), RegistryError> {
    if name.is_empty()
        || name.len() > MAX_MODEL_NAME_LEN
        || name.contains([',', '\n', '\r'])
    {
        return Err(RegistryError::InvalidModelName(name.to_string()));
    }
    Ok(())
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateModel(name) => {
                write!(f, "color model {:?} is already registered", name)
            }
            RegistryError::InvalidModelName(name) => {
                write!(f, "{:?} cannot be used as a color model name", name)
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Thread-safe mapping from model name to [`ColorModel`].
///
/// Registration and lookup take `&self`; a read-write lock lets many decoders
/// look models up at once while an occasional registration waits its turn.
/// Models are never removed, and registering a name twice is rejected.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use bi_palette::{Color, ModelRegistry, NamedPaletteModel, Palette};
///
/// let registry = ModelRegistry::with_builtins();
/// assert!(registry.lookup("v1").is_some());
/// assert!(registry.lookup("hex").is_some());
///
/// let mono = Palette::new([
///     ("ink", Color::from_rgb8(0, 0, 0)),
///     ("paper", Color::from_rgb8(255, 255, 255)),
/// ])
/// .unwrap();
/// registry.register(Arc::new(NamedPaletteModel::new("mono", mono))).unwrap();
/// assert_eq!(registry.names(), vec!["hex", "mono", "v1"]);
/// ```
#[derive(Default)]
pub struct ModelRegistry {
    models: RwLock<HashMap<String, Arc<dyn ColorModel>>>,
}

impl ModelRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in models: `"v1"` (CSS named colors) and
    /// `"hex"`.
    pub fn with_builtins() -> Self {
        let mut models: HashMap<String, Arc<dyn ColorModel>> = HashMap::new();
        let css = NamedPaletteModel::css();
        models.insert(css.name().to_string(), Arc::new(css));
        models.insert(HexModel.name().to_string(), Arc::new(HexModel));
        Self {
            models: RwLock::new(models),
        }
    }

    /// Register a model under its [`ColorModel::name`].
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateModel`] if the name is taken (the
    /// existing registration is left untouched), or
    /// [`RegistryError::InvalidModelName`] if the name fails
    /// [`validate_model_name`].
    pub fn register(&self, model: Arc<dyn ColorModel>) -> Result<(), RegistryError> {
        validate_model_name(model.name())?;
        let name = model.name().to_string();
        let mut models = self.models.write().unwrap_or_else(PoisonError::into_inner);
        if models.contains_key(&name) {
            return Err(RegistryError::DuplicateModel(name));
        }
        models.insert(name, model);
        Ok(())
    }

    /// Find a model by name.
    pub fn lookup(&self, name: &str) -> Option<Arc<dyn ColorModel>> {
        let models = self.models.read().unwrap_or_else(PoisonError::into_inner);
        models.get(name).cloned()
    }

    /// Returns true if a model with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        let models = self.models.read().unwrap_or_else(PoisonError::into_inner);
        models.contains_key(name)
    }

    /// Names of all registered models, sorted.
    pub fn names(&self) -> Vec<String> {
        let models = self.models.read().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<String> = models.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered models.
    pub fn len(&self) -> usize {
        self.models
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if no model is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("models", &self.names())
            .finish()
    }
}
