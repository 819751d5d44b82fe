//! In-memory page sources with call logging and failure injection

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use armpager::{
    ArmError, ArmResource, BlockingPageSource, BlockingResourceOps, Page, PageSource,
    ResourceGroup, ResourceOps, Result,
};

pub const PROVIDER: &str = "Fake.Provider/things";
pub const SUBSCRIPTION: &str = "sub-1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeItem {
    pub id: String,
    pub name: String,
}

impl FakeItem {
    pub fn new(group: &str, name: &str) -> Self {
        Self {
            id: format!(
                "/subscriptions/{}/resourceGroups/{}/providers/{}/{}",
                SUBSCRIPTION, group, PROVIDER, name
            ),
            name: name.to_string(),
        }
    }
}

impl ArmResource for FakeItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Shared record of every page source call, in order
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    pub fn record(&self, call: String) {
        self.0.lock().unwrap().push(call);
    }

    pub fn count(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

fn injected(what: &str) -> ArmError {
    ArmError::Api {
        status: 500,
        message: format!("injected failure on {}", what),
    }
}

/// Group listing served from fixed pages
pub struct FakeGroups {
    pages: Vec<Vec<String>>,
    log: CallLog,
    fail_page: Option<usize>,
}

impl FakeGroups {
    /// `names` split into pages of `page_size`
    pub fn new(names: &[&str], page_size: usize, log: CallLog) -> Self {
        let pages = if names.is_empty() {
            vec![Vec::new()]
        } else {
            names
                .chunks(page_size)
                .map(|c| c.iter().map(|s| s.to_string()).collect())
                .collect()
        };
        Self {
            pages,
            log,
            fail_page: None,
        }
    }

    pub fn failing_at(mut self, page: usize) -> Self {
        self.fail_page = Some(page);
        self
    }

    fn page(&self, index: usize) -> Result<Page<ResourceGroup>> {
        self.log.record(format!("groups:{}", index));
        if self.fail_page == Some(index) {
            return Err(injected(&format!("group page {}", index)));
        }
        let items = self.pages[index]
            .iter()
            .map(|name| ResourceGroup::named(name.as_str()))
            .collect();
        let next = (index + 1 < self.pages.len()).then(|| format!("groups-{}", index + 1));
        Ok(Page::new(items, next))
    }

    fn index_of(token: &str) -> Result<usize> {
        token
            .strip_prefix("groups-")
            .and_then(|n| n.parse().ok())
            .ok_or_else(|| ArmError::InvalidArgument(format!("foreign token {}", token)))
    }
}

impl PageSource for FakeGroups {
    type Scope = ();
    type Item = ResourceGroup;

    async fn fetch_first(&self, _scope: &()) -> Result<Page<ResourceGroup>> {
        self.page(0)
    }

    async fn fetch_next(&self, _scope: &(), token: &str) -> Result<Page<ResourceGroup>> {
        self.page(Self::index_of(token)?)
    }
}

impl BlockingPageSource for FakeGroups {
    type Scope = ();
    type Item = ResourceGroup;

    fn fetch_first(&self, _scope: &()) -> Result<Page<ResourceGroup>> {
        self.page(0)
    }

    fn fetch_next(&self, _scope: &(), token: &str) -> Result<Page<ResourceGroup>> {
        self.page(Self::index_of(token)?)
    }
}

/// Items per group, each group a list of pages
pub struct FakeItems {
    groups: Mutex<Vec<(String, Vec<Vec<FakeItem>>)>>,
    log: CallLog,
    fail_page: Option<(String, usize)>,
    fail_point_ops: bool,
}

impl FakeItems {
    pub fn new(log: CallLog) -> Self {
        Self {
            groups: Mutex::new(Vec::new()),
            log,
            fail_page: None,
            fail_point_ops: false,
        }
    }

    /// Add a group whose pages hold `sizes[p]` items named `{group}-{p}-{n}`
    pub fn group(self, group: &str, sizes: &[usize]) -> Self {
        let pages = sizes
            .iter()
            .enumerate()
            .map(|(p, size)| {
                (0..*size)
                    .map(|n| FakeItem::new(group, &format!("{}-{}-{}", group, p, n)))
                    .collect()
            })
            .collect();
        self.groups.lock().unwrap().push((group.to_string(), pages));
        self
    }

    pub fn failing_at(mut self, group: &str, page: usize) -> Self {
        self.fail_page = Some((group.to_string(), page));
        self
    }

    /// Make every get and delete fail with a 500
    pub fn failing_point_ops(mut self) -> Self {
        self.fail_point_ops = true;
        self
    }

    /// Every item in listing order
    pub fn all_names(&self) -> Vec<String> {
        self.groups
            .lock()
            .unwrap()
            .iter()
            .flat_map(|(_, pages)| pages.iter().flatten().map(|i| i.name.clone()))
            .collect()
    }

    fn page(&self, group: &str, index: usize) -> Result<Page<FakeItem>> {
        self.log.record(format!("items:{}:{}", group, index));
        if self.fail_page.as_ref() == Some(&(group.to_string(), index)) {
            return Err(injected(&format!("{} page {}", group, index)));
        }

        let groups = self.groups.lock().unwrap();
        let pages = match groups.iter().find(|(name, _)| name == group) {
            Some((_, pages)) => pages,
            None => {
                return Err(ArmError::Api {
                    status: 404,
                    message: format!("resource group '{}' could not be found", group),
                })
            }
        };
        if pages.is_empty() {
            return Ok(Page::empty());
        }
        let next = (index + 1 < pages.len()).then(|| format!("{}#{}", group, index + 1));
        Ok(Page::new(pages[index].clone(), next))
    }

    fn index_of(group: &str, token: &str) -> Result<usize> {
        match token.split_once('#') {
            Some((g, n)) if g == group => n
                .parse()
                .map_err(|_| ArmError::InvalidArgument(format!("bad token {}", token))),
            _ => Err(ArmError::InvalidArgument(format!(
                "token {} used for group {}",
                token, group
            ))),
        }
    }

    fn get(&self, group: &str, name: &str) -> Result<Option<FakeItem>> {
        self.log.record(format!("get:{}:{}", group, name));
        if self.fail_point_ops {
            return Err(injected("get"));
        }
        let groups = self.groups.lock().unwrap();
        Ok(groups
            .iter()
            .filter(|(g, _)| g == group)
            .flat_map(|(_, pages)| pages.iter().flatten())
            .find(|item| item.name == name)
            .cloned())
    }

    fn delete(&self, group: &str, name: &str) -> Result<bool> {
        self.log.record(format!("delete:{}:{}", group, name));
        if self.fail_point_ops {
            return Err(injected("delete"));
        }
        let mut groups = self.groups.lock().unwrap();
        let mut removed = false;
        for (_, pages) in groups.iter_mut().filter(|(g, _)| g == group) {
            for page in pages.iter_mut() {
                let before = page.len();
                page.retain(|item| item.name != name);
                removed |= page.len() != before;
            }
        }
        Ok(removed)
    }
}

impl PageSource for FakeItems {
    type Scope = ResourceGroup;
    type Item = FakeItem;

    async fn fetch_first(&self, scope: &ResourceGroup) -> Result<Page<FakeItem>> {
        self.page(&scope.name, 0)
    }

    async fn fetch_next(&self, scope: &ResourceGroup, token: &str) -> Result<Page<FakeItem>> {
        self.page(&scope.name, Self::index_of(&scope.name, token)?)
    }
}

impl BlockingPageSource for FakeItems {
    type Scope = ResourceGroup;
    type Item = FakeItem;

    fn fetch_first(&self, scope: &ResourceGroup) -> Result<Page<FakeItem>> {
        self.page(&scope.name, 0)
    }

    fn fetch_next(&self, scope: &ResourceGroup, token: &str) -> Result<Page<FakeItem>> {
        self.page(&scope.name, Self::index_of(&scope.name, token)?)
    }
}

impl ResourceOps for FakeItems {
    fn provider(&self) -> &str {
        PROVIDER
    }

    fn subscription(&self) -> Option<&str> {
        Some(SUBSCRIPTION)
    }

    async fn get_item(&self, group: &str, name: &str) -> Result<Option<FakeItem>> {
        self.get(group, name)
    }

    async fn delete_item(&self, group: &str, name: &str) -> Result<bool> {
        self.delete(group, name)
    }
}

impl BlockingResourceOps for FakeItems {
    fn provider(&self) -> &str {
        PROVIDER
    }

    fn subscription(&self) -> Option<&str> {
        Some(SUBSCRIPTION)
    }

    fn get_item(&self, group: &str, name: &str) -> Result<Option<FakeItem>> {
        self.get(group, name)
    }

    fn delete_item(&self, group: &str, name: &str) -> Result<bool> {
        self.delete(group, name)
    }
}

/// Groups g1, g2, g3 with page layouts [2,2], [] and [3] (7 items)
pub fn seven_item_fixture(log: &CallLog) -> (FakeGroups, FakeItems) {
    (
        FakeGroups::new(&["g1", "g2", "g3"], 2, log.clone()),
        FakeItems::new(log.clone())
            .group("g1", &[2, 2])
            .group("g2", &[])
            .group("g3", &[3]),
    )
}

/// 20 items over 3 groups with mixed page counts
pub fn twenty_item_fixture(log: &CallLog) -> (FakeGroups, FakeItems) {
    (
        FakeGroups::new(&["a", "b", "c"], 1, log.clone()),
        FakeItems::new(log.clone())
            .group("a", &[3, 4])
            .group("b", &[2, 2, 2])
            .group("c", &[5, 2]),
    )
}

/// Names of listed items
pub fn names<T: ArmResource>(items: &[T]) -> Vec<String> {
    items.iter().map(|i| i.name().to_string()).collect()
}
