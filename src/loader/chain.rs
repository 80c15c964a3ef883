//! Composite loader trying backends in priority order.

use crate::error::LoadError;
use crate::loader::ResourceLoader;

/// Tries an ordered list of loaders, first match wins.
///
/// The order is a deliberate precedence: a local filesystem hit
/// overrides a remote fetch for the same relative name. Members are
/// usually backends but can be any loader; composition is by the common
/// contract, not by concrete type.
///
/// A member's genuine access failure during the existence scan is put
/// aside so the remaining members still get their turn; it resurfaces
/// only when every member failed that way. The member actually selected
/// for `load` propagates its failures directly.
pub struct ChainedLoader {
    members: Vec<Box<dyn ResourceLoader>>,
}

impl ChainedLoader {
    /// Create a chain over an ordered list of loaders.
    pub fn new(members: Vec<Box<dyn ResourceLoader>>) -> Self {
        Self { members }
    }

    /// Append a loader at the lowest priority position.
    pub fn push(&mut self, loader: impl ResourceLoader + 'static) {
        self.members.push(Box::new(loader));
    }

    /// Number of member loaders.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check whether the chain has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl ResourceLoader for ChainedLoader {
    fn exists(&self, resource: &str, paths: &[String]) -> Result<bool, LoadError> {
        let mut last_error = None;
        let mut all_failed = !self.members.is_empty();
        for member in &self.members {
            match member.exists(resource, paths) {
                Ok(true) => return Ok(true),
                Ok(false) => all_failed = false,
                Err(e) => last_error = Some(e),
            }
        }
        match last_error {
            Some(e) if all_failed => Err(e),
            _ => Ok(false),
        }
    }

    fn load(
        &self,
        resource: &str,
        paths: &[String],
        include_stack: &mut Vec<String>,
        charset: &str,
    ) -> Result<String, LoadError> {
        let mut last_error = None;
        let mut all_failed = !self.members.is_empty();
        for member in &self.members {
            match member.exists(resource, paths) {
                Ok(true) => return member.load(resource, paths, include_stack, charset),
                Ok(false) => all_failed = false,
                Err(e) => last_error = Some(e),
            }
        }
        match last_error {
            Some(e) if all_failed => Err(e),
            _ => Err(LoadError::not_found(resource, paths)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed-content loader for a single resource name.
    struct Fixed {
        name: &'static str,
        content: &'static str,
    }

    impl ResourceLoader for Fixed {
        fn exists(&self, resource: &str, _paths: &[String]) -> Result<bool, LoadError> {
            Ok(resource == self.name)
        }

        fn load(
            &self,
            resource: &str,
            paths: &[String],
            _stack: &mut Vec<String>,
            _charset: &str,
        ) -> Result<String, LoadError> {
            if resource == self.name {
                Ok(self.content.to_string())
            } else {
                Err(LoadError::not_found(resource, paths))
            }
        }
    }

    /// Loader whose `load` must never run.
    struct NeverLoaded;

    impl ResourceLoader for NeverLoaded {
        fn exists(&self, _resource: &str, _paths: &[String]) -> Result<bool, LoadError> {
            Ok(false)
        }

        fn load(
            &self,
            _resource: &str,
            _paths: &[String],
            _stack: &mut Vec<String>,
            _charset: &str,
        ) -> Result<String, LoadError> {
            panic!("load delegated to a member that reported exists=false");
        }
    }

    /// Loader that always fails its existence probe.
    struct Broken;

    impl ResourceLoader for Broken {
        fn exists(&self, resource: &str, _paths: &[String]) -> Result<bool, LoadError> {
            Err(LoadError::access(resource, std::io::Error::other("backend down")))
        }

        fn load(
            &self,
            resource: &str,
            _paths: &[String],
            _stack: &mut Vec<String>,
            _charset: &str,
        ) -> Result<String, LoadError> {
            Err(LoadError::access(resource, std::io::Error::other("backend down")))
        }
    }

    #[test]
    fn test_first_match_wins() {
        let chain = ChainedLoader::new(vec![
            Box::new(Fixed { name: "a.less", content: "first" }),
            Box::new(Fixed { name: "a.less", content: "second" }),
        ]);
        let mut stack = Vec::new();
        let text = chain.load("a.less", &[], &mut stack, "UTF-8").unwrap();
        assert_eq!(text, "first");
    }

    #[test]
    fn test_skips_members_without_the_resource() {
        let chain = ChainedLoader::new(vec![
            Box::new(NeverLoaded),
            Box::new(Fixed { name: "b.less", content: "from b" }),
        ]);
        assert!(chain.exists("b.less", &[]).unwrap());
        let mut stack = Vec::new();
        let text = chain.load("b.less", &[], &mut stack, "UTF-8").unwrap();
        assert_eq!(text, "from b");
    }

    #[test]
    fn test_no_member_reports_existence() {
        let chain = ChainedLoader::new(vec![Box::new(NeverLoaded), Box::new(NeverLoaded)]);
        assert!(!chain.exists("x.less", &[]).unwrap());
        let mut stack = Vec::new();
        let paths = vec!["styles/".to_string()];
        let err = chain.load("x.less", &paths, &mut stack, "UTF-8").unwrap_err();
        match err {
            LoadError::NotFound { resource, paths } => {
                assert_eq!(resource, "x.less");
                assert_eq!(paths, vec!["styles/"]);
            }
            other => panic!("expected NotFound, got {other}"),
        }
    }

    #[test]
    fn test_access_error_swallowed_while_others_remain() {
        let chain = ChainedLoader::new(vec![
            Box::new(Broken),
            Box::new(Fixed { name: "a.less", content: "ok" }),
        ]);
        assert!(chain.exists("a.less", &[]).unwrap());
        assert!(!chain.exists("z.less", &[]).unwrap());
    }

    #[test]
    fn test_all_members_failing_propagates_last_error() {
        let chain = ChainedLoader::new(vec![Box::new(Broken), Box::new(Broken)]);
        let err = chain.exists("a.less", &[]).unwrap_err();
        assert!(matches!(err, LoadError::Access { .. }));

        let mut stack = Vec::new();
        let err = chain.load("a.less", &[], &mut stack, "UTF-8").unwrap_err();
        assert!(matches!(err, LoadError::Access { .. }));
    }

    #[test]
    fn test_selected_member_load_failure_propagates() {
        struct ExistsButUnreadable;
        impl ResourceLoader for ExistsButUnreadable {
            fn exists(&self, _r: &str, _p: &[String]) -> Result<bool, LoadError> {
                Ok(true)
            }
            fn load(
                &self,
                resource: &str,
                _p: &[String],
                _s: &mut Vec<String>,
                _c: &str,
            ) -> Result<String, LoadError> {
                Err(LoadError::access(resource, std::io::Error::other("denied")))
            }
        }

        let chain = ChainedLoader::new(vec![
            Box::new(ExistsButUnreadable),
            Box::new(Fixed { name: "a.less", content: "never reached" }),
        ]);
        let mut stack = Vec::new();
        let err = chain.load("a.less", &[], &mut stack, "UTF-8").unwrap_err();
        assert!(matches!(err, LoadError::Access { .. }));
    }
}
