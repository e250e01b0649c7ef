//! Command templates for the scaffolding and migration tools
//!
//! Pure functions from prompt answers to command text. Flags are fixed per
//! template; only the values come from the user.

use std::path::Path;

use super::CommandLine;

/// `dotnet aspnet-codegenerator`
pub const CODEGENERATOR: &str = "dotnet aspnet-codegenerator";

/// `dotnet ef`
pub const EF: &str = "dotnet ef";

/// CRUD controller with views
pub fn controller_crud(project: &Path, controller: &str, model: &str, db_context: &str) -> String {
    CommandLine::new(CODEGENERATOR)
        .arg("controller")
        .option("-name", controller)
        .option("-m", model)
        .option("-dc", db_context)
        .option("--relativeFolderPath", "Controllers")
        .switch("--useDefaultLayout")
        .switch("--force")
        .project(project)
        .build()
}

/// CRUD Razor pages under `Pages/<folder>`
pub fn razor_crud(project: &Path, model: &str, db_context: &str, folder: &str) -> String {
    CommandLine::new(CODEGENERATOR)
        .arg("razorpage")
        .option("-m", model)
        .option("-dc", db_context)
        .option("-outDir", &format!("Pages/{}", folder))
        .switch("--useDefaultLayout")
        .switch("--force")
        .project(project)
        .build()
}

/// Full default Identity UI
pub fn identity_full(project: &Path, db_context: &str) -> String {
    CommandLine::new(CODEGENERATOR)
        .arg("identity")
        .option("-dc", db_context)
        .switch("--useDefaultUI")
        .project(project)
        .build()
}

/// Selected Identity pages, joined with `;`
pub fn identity_files(project: &Path, db_context: &str, files: &[String]) -> String {
    CommandLine::new(CODEGENERATOR)
        .arg("identity")
        .option("-dc", db_context)
        .quoted_option("--files", &files.join(";"))
        .project(project)
        .build()
}

/// Empty view in `Views/<controller>`
pub fn empty_view(project: &Path, view: &str, controller: &str) -> String {
    CommandLine::new(CODEGENERATOR)
        .arg("view")
        .arg(view)
        .arg("Empty")
        .option("--relativeFolderPath", &format!("Views/{}", controller))
        .project(project)
        .build()
}

/// Empty controller in `Controllers`
pub fn empty_controller(project: &Path, controller: &str) -> String {
    CommandLine::new(CODEGENERATOR)
        .arg("controller")
        .option("-name", controller)
        .option("--relativeFolderPath", "Controllers")
        .switch("--force")
        .project(project)
        .build()
}

/// `ef migrations add`
pub fn add_migration(project: &Path, name: &str, db_context: Option<&str>) -> String {
    CommandLine::new(EF)
        .arg("migrations")
        .arg("add")
        .arg(name)
        .project(project)
        .optional_option("--context", db_context)
        .build()
}

/// `ef database update`, to the latest migration unless a target is given
pub fn update_database(project: &Path, target: Option<&str>) -> String {
    CommandLine::new(EF)
        .arg("database")
        .arg("update")
        .project(project)
        .optional_arg(target)
        .build()
}

/// `ef migrations list`
pub fn list_migrations(project: &Path, db_context: Option<&str>) -> String {
    CommandLine::new(EF)
        .arg("migrations")
        .arg("list")
        .project(project)
        .optional_option("--context", db_context)
        .build()
}

/// `ef dbcontext info`
pub fn db_context_info(project: &Path, db_context: Option<&str>) -> String {
    CommandLine::new(EF)
        .arg("dbcontext")
        .arg("info")
        .project(project)
        .optional_option("--context", db_context)
        .build()
}
