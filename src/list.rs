#[derive(Debug)]
struct Node {
    value: f64,
    next: Option<Box<Node>>,
}

impl Node {
    fn new(value: f64) -> Self {
        Self { value, next: None }
    }
}

/// Singly linked list of numbers, kept in insertion order.
///
/// Only grows at the tail. There is no tail pointer, so `insert` walks the
/// whole chain.
#[derive(Debug, Default)]
pub struct NumberList {
    head: Option<Box<Node>>,
    len: usize,
}

impl NumberList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, value: f64) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node::new(value)));
        self.len += 1;
    }

    pub fn size(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn to_list(&self) -> Vec<f64> {
        self.iter().collect()
    }

    pub fn for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(f64),
    {
        for value in self.iter() {
            visitor(value);
        }
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

// Unlink node by node so dropping a long list doesn't recurse per node.
impl Drop for NumberList {
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl Iterator for Iter<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            node.value
        })
    }
}

impl Extend<f64> for NumberList {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl FromIterator<f64> for NumberList {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}
