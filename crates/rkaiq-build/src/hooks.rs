//! Module types registered with the host build system.
//!
//! The host owns a [`ModuleTypeRegistry`]. [`register_module_types`] adds the
//! three rkaiq types; each wraps one of the host's base factories and attaches
//! a load hook that appends board specific properties when a module of that
//! type is loaded.

use std::collections::BTreeMap;

use crate::{
    env::ConfigAccessor,
    error::{Error, Result},
    macro_table::MacroTable,
    properties::ModuleProperties,
    resolver::{defaults_cflags, shared_srcs, static_lib_srcs},
};

pub const RKAIQ_DEFAULTS: &str = "rkaiq_defaults";
pub const RKAIQ_LIBRARY_SHARED: &str = "cc_rkaiq_library_shared";
pub const RKAIQ_LIBRARY_STATIC: &str = "cc_rkaiq_library_static";

/// Runs after a module definition is parsed and before it is built.
pub type LoadHook = fn(&mut LoadHookContext<'_>);

/// Creates a fresh, unnamed module.
pub type ModuleFactory = fn() -> Module;

/// The host's base module kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleKind {
    Defaults,
    LibraryShared,
    LibraryStatic,
}

/// A module definition and the hooks attached to it.
#[derive(Clone)]
pub struct Module {
    name: String,
    kind: ModuleKind,
    properties: ModuleProperties,
    load_hooks: Vec<LoadHook>,
}

impl Module {
    pub fn new(kind: ModuleKind) -> Self {
        Self {
            name: String::new(),
            kind,
            properties: ModuleProperties::new(),
            load_hooks: vec![],
        }
    }

    /// Base factory for defaults modules.
    pub fn defaults() -> Self {
        Self::new(ModuleKind::Defaults)
    }

    /// Base factory for shared libraries.
    pub fn library_shared() -> Self {
        Self::new(ModuleKind::LibraryShared)
    }

    /// Base factory for static libraries.
    pub fn library_static() -> Self {
        Self::new(ModuleKind::LibraryStatic)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ModuleKind {
        self.kind
    }

    pub fn properties(&self) -> &ModuleProperties {
        &self.properties
    }

    pub fn set_name(&mut self, name: &str) -> &mut Self {
        self.name = name.to_owned();
        self
    }

    pub fn add_load_hook(&mut self, hook: LoadHook) -> &mut Self {
        self.load_hooks.push(hook);
        self
    }

    /// Runs every load hook in attach order against this module's properties.
    pub fn load(&mut self, config: &dyn ConfigAccessor, table: &MacroTable) {
        let mut ctx = LoadHookContext {
            module_name: &self.name,
            config,
            table,
            properties: &mut self.properties,
        };

        for hook in &self.load_hooks {
            hook(&mut ctx);
        }
    }
}

impl std::fmt::Debug for Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Module")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("properties", &self.properties)
            .field("load_hooks", &self.load_hooks.len())
            .finish()
    }
}

/// What a load hook can see and change.
pub struct LoadHookContext<'a> {
    module_name: &'a str,
    config: &'a dyn ConfigAccessor,
    table: &'a MacroTable,
    properties: &'a mut ModuleProperties,
}

impl<'a> LoadHookContext<'a> {
    pub fn module_name(&self) -> &str {
        self.module_name
    }

    pub fn table(&self) -> &MacroTable {
        self.table
    }

    /// The target board, `""` when unset.
    pub fn board(&self) -> String {
        self.config.board()
    }

    /// Appends `props` to the module's properties.
    pub fn append_properties(&mut self, props: ModuleProperties) {
        self.properties.append(props);
    }
}

/// Module type name to factory.
#[derive(Debug, Default, Clone)]
pub struct ModuleTypeRegistry {
    factories: BTreeMap<String, ModuleFactory>,
}

impl ModuleTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_module_type(&mut self, name: &str, factory: ModuleFactory) -> Result<()> {
        if self.factories.contains_key(name) {
            return Err(Error::DuplicateModuleType(name.to_owned()));
        }

        self.factories.insert(name.to_owned(), factory);
        Ok(())
    }

    pub fn module_types(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(|k| k.as_str())
    }

    /// Instantiates a module of `module_type` named `module_name`.
    pub fn create(&self, module_type: &str, module_name: &str) -> Result<Module> {
        let factory = self
            .factories
            .get(module_type)
            .ok_or_else(|| Error::UnknownModuleType(module_type.to_owned()))?;

        let mut module = factory();
        module.set_name(module_name);

        Ok(module)
    }
}

/// Registers the rkaiq module types.
pub fn register_module_types(registry: &mut ModuleTypeRegistry) -> Result<()> {
    registry.register_module_type(RKAIQ_DEFAULTS, rkaiq_defaults_factory)?;
    registry.register_module_type(RKAIQ_LIBRARY_SHARED, rkaiq_library_shared_factory)?;
    registry.register_module_type(RKAIQ_LIBRARY_STATIC, rkaiq_library_static_factory)?;

    Ok(())
}

pub fn rkaiq_defaults_factory() -> Module {
    let mut module = Module::defaults();
    module.add_load_hook(rkaiq_defaults);
    module
}

pub fn rkaiq_library_shared_factory() -> Module {
    let mut module = Module::library_shared();
    module.add_load_hook(rkaiq_library_shared);
    module
}

pub fn rkaiq_library_static_factory() -> Module {
    let mut module = Module::library_static();
    module.add_load_hook(rkaiq_library_static);
    module
}

/// Device cflags: algorithm macros, then the ISP hardware flag.
pub fn rkaiq_defaults(ctx: &mut LoadHookContext<'_>) {
    let board = ctx.board();
    tracing::debug!(module = ctx.module_name(), board = %board, "rkaiq defaults");

    let mut props = ModuleProperties::new();
    props.android.cflags = defaults_cflags(&board, ctx.table());

    ctx.append_properties(props);
}

/// Device sources and algorithm static libraries of the shared engine.
pub fn rkaiq_library_shared(ctx: &mut LoadHookContext<'_>) {
    let board = ctx.board();
    tracing::debug!(module = ctx.module_name(), board = %board, "rkaiq library shared");

    let table = ctx.table();

    let mut props = ModuleProperties::new();
    props.android.srcs = shared_srcs(&board, table);
    props.android.static_libs = table.macro_switch(&board).static_libs();

    ctx.append_properties(props);
}

/// Sources of the algorithm static library named after the module.
pub fn rkaiq_library_static(ctx: &mut LoadHookContext<'_>) {
    let board = ctx.board();
    tracing::debug!(module = ctx.module_name(), board = %board, "rkaiq library static");

    let mut props = ModuleProperties::new();
    props.common.srcs = static_lib_srcs(ctx.module_name(), &board, ctx.table());

    ctx.append_properties(props);
}
