use crate::classifier::Category;
use crate::scanner::FileEntry;
use std::path::PathBuf;

/// Destination path for a classified file, relative to the working directory.
///
/// Audio and report files get a role prefix on the original name; the prefix
/// is applied on every match, so a file that already carries one picks up
/// another. Documents and research keep their names unchanged.
pub fn destination(category: Category, entry: &FileEntry) -> Option<PathBuf> {
    let renamed = match category {
        Category::Audio => format!("audio_{}", entry.file_name),
        Category::ReportsEmail => format!("email_{}", entry.file_name),
        Category::ReportsWebsite => format!("website_{}", entry.file_name),
        Category::Documents | Category::Research => entry.file_name.clone(),
        Category::Unclassified => return None,
    };

    category
        .directory()
        .map(|dir| PathBuf::from(dir).join(renamed))
}
