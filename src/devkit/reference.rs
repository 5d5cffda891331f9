//! # Reference Data
//!
//! A fixed, hand-authored table describing six standard-library containers
//! and their member operations. Every text is authored in Simplified Chinese
//! and English; [`Locale`] picks which half of a pair is displayed.
//!
//! The table is `'static` and never mutated. Lookups go through an index
//! built on first use.

use crate::error::{DevkitError, Result};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// Which half of a bilingual [`Text`] to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Zh,
    En,
}

impl Locale {
    /// `en`, `en-US`, `en_GB`... select English; everything else Chinese.
    pub fn from_code(code: &str) -> Self {
        if code.trim().to_ascii_lowercase().starts_with("en") {
            Locale::En
        } else {
            Locale::Zh
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Text {
    pub zh: &'static str,
    pub en: &'static str,
}

impl Text {
    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Zh => self.zh,
            Locale::En => self.en,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub signature: &'static str,
    pub description: Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceEntry {
    pub name: &'static str,
    pub description: Text,
    pub operations: &'static [Operation],
}

impl ReferenceEntry {
    /// Flattens the entry into display strings for one locale.
    pub fn localized(&self, locale: Locale) -> LocalizedEntry {
        LocalizedEntry {
            name: self.name,
            description: self.description.get(locale),
            operations: self
                .operations
                .iter()
                .map(|op| LocalizedOperation {
                    signature: op.signature,
                    description: op.description.get(locale),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedOperation {
    pub signature: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub operations: Vec<LocalizedOperation>,
}

const fn op(signature: &'static str, zh: &'static str, en: &'static str) -> Operation {
    Operation {
        signature,
        description: Text { zh, en },
    }
}

static ENTRIES: &[ReferenceEntry] = &[
    ReferenceEntry {
        name: "vector",
        description: Text {
            zh: "std::vector - 动态数组容器",
            en: "std::vector - dynamic array container",
        },
        operations: &[
            op("push_back()", "在向量末尾添加元素", "Append an element to the end"),
            op("pop_back()", "删除向量末尾的元素", "Remove the last element"),
            op(
                "at(index)",
                "访问指定位置的元素，带边界检查",
                "Access the element at a position, with bounds checking",
            ),
            op("size()", "返回向量中的元素数量", "Return the number of elements"),
            op("clear()", "清除向量中的所有元素", "Remove all elements"),
            op("reserve(size)", "预留存储空间", "Reserve storage capacity"),
            op("resize(size)", "改变向量的大小", "Change the number of elements"),
            op("empty()", "检查向量是否为空", "Check whether the vector is empty"),
            op("front()", "访问第一个元素", "Access the first element"),
            op("back()", "访问最后一个元素", "Access the last element"),
        ],
    },
    ReferenceEntry {
        name: "list",
        description: Text {
            zh: "std::list - 双向链表容器",
            en: "std::list - doubly linked list container",
        },
        operations: &[
            op("push_front()", "在链表开头插入元素", "Insert an element at the front"),
            op("push_back()", "在链表末尾插入元素", "Insert an element at the back"),
            op("pop_front()", "删除链表开头的元素", "Remove the first element"),
            op("pop_back()", "删除链表末尾的元素", "Remove the last element"),
            op(
                "insert(iterator, value)",
                "在指定位置插入元素",
                "Insert an element at a position",
            ),
            op("erase(iterator)", "删除指定位置的元素", "Remove the element at a position"),
            op("size()", "返回链表中的元素数量", "Return the number of elements"),
            op("clear()", "清除链表中的所有元素", "Remove all elements"),
            op("sort()", "对链表元素进行排序", "Sort the elements"),
            op("merge(list)", "合并两个有序链表", "Merge two sorted lists"),
        ],
    },
    ReferenceEntry {
        name: "map",
        description: Text {
            zh: "std::map - 关联容器，键值对集合",
            en: "std::map - associative container, a collection of key-value pairs",
        },
        operations: &[
            op("insert({key, value})", "插入键值对", "Insert a key-value pair"),
            op("erase(key)", "删除指定键的元素", "Remove the element with a key"),
            op("find(key)", "查找指定键的元素", "Find the element with a key"),
            op(
                "at(key)",
                "访问指定键的元素，带边界检查",
                "Access the element with a key, with bounds checking",
            ),
            op("size()", "返回map中的元素数量", "Return the number of elements"),
            op("clear()", "清除map中的所有元素", "Remove all elements"),
            op(
                "count(key)",
                "返回具有指定键的元素数量",
                "Return the number of elements with a key",
            ),
            op("empty()", "检查map是否为空", "Check whether the map is empty"),
            op("begin()", "返回指向第一个元素的迭代器", "Return an iterator to the first element"),
            op("end()", "返回指向末尾的迭代器", "Return an iterator past the end"),
        ],
    },
    ReferenceEntry {
        name: "string",
        description: Text {
            zh: "std::string - 字符串类",
            en: "std::string - character string class",
        },
        operations: &[
            op("length()", "返回字符串长度", "Return the length of the string"),
            op("append(str)", "在字符串末尾添加内容", "Append content to the end"),
            op("substr(start, length)", "返回子字符串", "Return a substring"),
            op("find(str)", "查找子字符串", "Find a substring"),
            op(
                "replace(pos, len, str)",
                "替换字符串的一部分",
                "Replace part of the string",
            ),
            op("c_str()", "返回C风格字符串", "Return a C-style string"),
            op("clear()", "清除字符串内容", "Clear the contents"),
            op("empty()", "检查字符串是否为空", "Check whether the string is empty"),
            op("at(index)", "访问指定位置的字符", "Access the character at a position"),
            op("compare(str)", "比较两个字符串", "Compare two strings"),
        ],
    },
    ReferenceEntry {
        name: "array",
        description: Text {
            zh: "std::array - 固定大小数组容器",
            en: "std::array - fixed-size array container",
        },
        operations: &[
            op(
                "at(index)",
                "访问指定位置的元素，带边界检查",
                "Access the element at a position, with bounds checking",
            ),
            op("operator[]", "访问指定位置的元素", "Access the element at a position"),
            op("front()", "访问第一个元素", "Access the first element"),
            op("back()", "访问最后一个元素", "Access the last element"),
            op("size()", "返回数组中的元素数量", "Return the number of elements"),
            op("fill(value)", "用指定值填充数组", "Fill the array with a value"),
            op("empty()", "检查数组是否为空", "Check whether the array is empty"),
            op("begin()", "返回指向第一个元素的迭代器", "Return an iterator to the first element"),
            op("end()", "返回指向末尾的迭代器", "Return an iterator past the end"),
            op(
                "data()",
                "返回指向数组第一个元素的指针",
                "Return a pointer to the first element",
            ),
        ],
    },
    ReferenceEntry {
        name: "set",
        description: Text {
            zh: "std::set - 有序唯一元素集合",
            en: "std::set - ordered collection of unique elements",
        },
        operations: &[
            op("insert(value)", "插入元素", "Insert an element"),
            op("erase(value)", "删除元素", "Remove an element"),
            op("find(value)", "查找元素", "Find an element"),
            op("size()", "返回set中的元素数量", "Return the number of elements"),
            op("clear()", "清除set中的所有元素", "Remove all elements"),
            op(
                "count(value)",
                "返回具有指定值的元素数量",
                "Return the number of elements with a value",
            ),
            op("empty()", "检查set是否为空", "Check whether the set is empty"),
            op("begin()", "返回指向第一个元素的迭代器", "Return an iterator to the first element"),
            op("end()", "返回指向末尾的迭代器", "Return an iterator past the end"),
        ],
    },
];

static INDEX: Lazy<HashMap<&'static str, &'static ReferenceEntry>> =
    Lazy::new(|| ENTRIES.iter().map(|entry| (entry.name, entry)).collect());

/// All structure names in ascending order.
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<_> = ENTRIES.iter().map(|entry| entry.name).collect();
    names.sort_unstable();
    names
}

/// All entries, ordered like [`names`].
pub fn entries() -> Vec<&'static ReferenceEntry> {
    let mut entries: Vec<_> = ENTRIES.iter().collect();
    entries.sort_unstable_by_key(|entry| entry.name);
    entries
}

/// Looks up a structure by name. `Map`, ` map ` and `std::map` all resolve.
pub fn describe(name: &str) -> Result<&'static ReferenceEntry> {
    let key = name.trim().to_ascii_lowercase();
    let key = key.strip_prefix("std::").unwrap_or(&key);
    INDEX
        .get(key)
        .copied()
        .ok_or_else(|| DevkitError::StructureNotFound(name.trim().to_string()))
}
