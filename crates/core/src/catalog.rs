//! Built-in problem catalog.
//!
//! The catalog is static data; progress is overlaid at load time by
//! [`crate::snapshot::merge`].

use std::collections::HashSet;

use thiserror::Error;

use crate::model::Difficulty::{Easy, Hard, Medium};
use crate::model::{Category, Difficulty, Problem};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("duplicate category name: {0}")]
    DuplicateCategory(String),

    #[error("duplicate problem {problem:?} in category {category:?}")]
    DuplicateProblem { category: String, problem: String },
}

/// Compile-time description of one catalog category.
#[derive(Debug, Clone, Copy)]
pub struct SeedCategory {
    pub name: &'static str,
    pub icon: &'static str,
    pub problems: &'static [(&'static str, Difficulty)],
    pub hard_list: &'static [&'static str],
}

impl SeedCategory {
    #[must_use]
    pub fn to_category(&self) -> Category {
        let problems = self
            .problems
            .iter()
            .map(|(name, difficulty)| Problem::new(*name, *difficulty))
            .collect();
        let hard_list = self.hard_list.iter().map(|name| (*name).to_string()).collect();
        Category::new(self.name, self.icon, problems, hard_list)
    }
}

/// Fresh, uncompleted categories for the built-in catalog.
#[must_use]
pub fn seed() -> Vec<Category> {
    from_seed(CATALOG)
}

#[must_use]
pub fn from_seed(seed: &[SeedCategory]) -> Vec<Category> {
    seed.iter().map(SeedCategory::to_category).collect()
}

/// Check that category names are unique and problem names are unique per category.
///
/// # Errors
///
/// Returns the first duplicate found.
pub fn validate_catalog(categories: &[Category]) -> Result<(), CatalogError> {
    let mut seen_categories = HashSet::new();
    for category in categories {
        if !seen_categories.insert(category.name()) {
            return Err(CatalogError::DuplicateCategory(category.name().to_string()));
        }
        let mut seen_problems = HashSet::new();
        for problem in category.problems() {
            if !seen_problems.insert(problem.name()) {
                return Err(CatalogError::DuplicateProblem {
                    category: category.name().to_string(),
                    problem: problem.name().to_string(),
                });
            }
        }
    }
    Ok(())
}

pub static CATALOG: &[SeedCategory] = &[
    SeedCategory {
        name: "Arrays & Hashing",
        icon: "🧮",
        problems: &[
            ("Contains Duplicate", Easy),
            ("Valid Anagram", Easy),
            ("Two Sum", Easy),
            ("Group Anagrams", Medium),
            ("Top K Frequent Elements", Medium),
            ("Encode and Decode Strings", Medium),
            ("Product of Array Except Self", Medium),
            ("Valid Sudoku", Medium),
            ("Longest Consecutive Sequence", Medium),
        ],
        hard_list: &["Encode and Decode Strings", "Longest Consecutive Sequence"],
    },
    SeedCategory {
        name: "Two Pointers",
        icon: "👉",
        problems: &[
            ("Valid Palindrome", Easy),
            ("Two Sum II Input Array Is Sorted", Medium),
            ("3Sum", Medium),
            ("Container With Most Water", Medium),
            ("Trapping Rain Water", Hard),
        ],
        hard_list: &["3Sum", "Trapping Rain Water"],
    },
    SeedCategory {
        name: "Sliding Window",
        icon: "🪟",
        problems: &[
            ("Best Time to Buy and Sell Stock", Easy),
            ("Longest Substring Without Repeating Characters", Medium),
            ("Longest Repeating Character Replacement", Medium),
            ("Permutation in String", Medium),
            ("Minimum Window Substring", Hard),
            ("Sliding Window Maximum", Hard),
        ],
        hard_list: &["Minimum Window Substring", "Sliding Window Maximum"],
    },
    SeedCategory {
        name: "Stack",
        icon: "🥞",
        problems: &[
            ("Valid Parentheses", Easy),
            ("Min Stack", Medium),
            ("Evaluate Reverse Polish Notation", Medium),
            ("Generate Parentheses", Medium),
            ("Daily Temperatures", Medium),
            ("Car Fleet", Medium),
            ("Largest Rectangle in Histogram", Hard),
        ],
        hard_list: &["Car Fleet", "Largest Rectangle in Histogram"],
    },
    SeedCategory {
        name: "Binary Search",
        icon: "🔍",
        problems: &[
            ("Binary Search", Easy),
            ("Search a 2D Matrix", Medium),
            ("Koko Eating Bananas", Medium),
            ("Find Minimum in Rotated Sorted Array", Medium),
            ("Search in Rotated Sorted Array", Medium),
            ("Time Based Key-Value Store", Medium),
            ("Median of Two Sorted Arrays", Hard),
        ],
        hard_list: &["Search in Rotated Sorted Array", "Median of Two Sorted Arrays"],
    },
    SeedCategory {
        name: "Linked List",
        icon: "🔗",
        problems: &[
            ("Reverse Linked List", Easy),
            ("Merge Two Sorted Lists", Easy),
            ("Linked List Cycle", Easy),
            ("Reorder List", Medium),
            ("Remove Nth Node From End of List", Medium),
            ("Copy List with Random Pointer", Medium),
            ("Add Two Numbers", Medium),
            ("Find the Duplicate Number", Medium),
            ("LRU Cache", Medium),
            ("Merge k Sorted Lists", Hard),
            ("Reverse Nodes in k-Group", Hard),
        ],
        hard_list: &["LRU Cache", "Merge k Sorted Lists", "Reverse Nodes in k-Group"],
    },
    SeedCategory {
        name: "Trees",
        icon: "🌳",
        problems: &[
            ("Invert Binary Tree", Easy),
            ("Maximum Depth of Binary Tree", Easy),
            ("Diameter of Binary Tree", Easy),
            ("Balanced Binary Tree", Easy),
            ("Same Tree", Easy),
            ("Subtree of Another Tree", Easy),
            ("Lowest Common Ancestor of a Binary Search Tree", Medium),
            ("Binary Tree Level Order Traversal", Medium),
            ("Binary Tree Right Side View", Medium),
            ("Count Good Nodes in Binary Tree", Medium),
            ("Validate Binary Search Tree", Medium),
            ("Kth Smallest Element in a BST", Medium),
            ("Construct Binary Tree from Preorder and Inorder Traversal", Medium),
            ("Binary Tree Maximum Path Sum", Hard),
            ("Serialize and Deserialize Binary Tree", Hard),
        ],
        hard_list: &[
            "Construct Binary Tree from Preorder and Inorder Traversal",
            "Binary Tree Maximum Path Sum",
            "Serialize and Deserialize Binary Tree",
        ],
    },
    SeedCategory {
        name: "Tries",
        icon: "🔤",
        problems: &[
            ("Implement Trie Prefix Tree", Medium),
            ("Design Add and Search Words Data Structure", Medium),
            ("Word Search II", Hard),
        ],
        hard_list: &["Word Search II"],
    },
    SeedCategory {
        name: "Heap / Priority Queue",
        icon: "⛰️",
        problems: &[
            ("Kth Largest Element in a Stream", Easy),
            ("Last Stone Weight", Easy),
            ("K Closest Points to Origin", Medium),
            ("Kth Largest Element in an Array", Medium),
            ("Task Scheduler", Medium),
            ("Design Twitter", Medium),
            ("Find Median from Data Stream", Hard),
        ],
        hard_list: &["Task Scheduler", "Find Median from Data Stream"],
    },
    SeedCategory {
        name: "Backtracking",
        icon: "↩️",
        problems: &[
            ("Subsets", Medium),
            ("Combination Sum", Medium),
            ("Permutations", Medium),
            ("Subsets II", Medium),
            ("Combination Sum II", Medium),
            ("Word Search", Medium),
            ("Palindrome Partitioning", Medium),
            ("Letter Combinations of a Phone Number", Medium),
            ("N-Queens", Hard),
        ],
        hard_list: &["Palindrome Partitioning", "N-Queens"],
    },
    SeedCategory {
        name: "Graphs",
        icon: "🕸️",
        problems: &[
            ("Number of Islands", Medium),
            ("Max Area of Island", Medium),
            ("Clone Graph", Medium),
            ("Walls and Gates", Medium),
            ("Rotting Oranges", Medium),
            ("Pacific Atlantic Water Flow", Medium),
            ("Surrounded Regions", Medium),
            ("Course Schedule", Medium),
            ("Course Schedule II", Medium),
            ("Graph Valid Tree", Medium),
            ("Number of Connected Components in an Undirected Graph", Medium),
            ("Redundant Connection", Medium),
            ("Word Ladder", Hard),
        ],
        hard_list: &["Pacific Atlantic Water Flow", "Course Schedule II", "Word Ladder"],
    },
    SeedCategory {
        name: "Advanced Graphs",
        icon: "🗺️",
        problems: &[
            ("Min Cost to Connect All Points", Medium),
            ("Network Delay Time", Medium),
            ("Cheapest Flights Within K Stops", Medium),
            ("Reconstruct Itinerary", Hard),
            ("Swim in Rising Water", Hard),
            ("Alien Dictionary", Hard),
        ],
        hard_list: &["Cheapest Flights Within K Stops", "Alien Dictionary"],
    },
    SeedCategory {
        name: "1-D Dynamic Programming",
        icon: "📈",
        problems: &[
            ("Climbing Stairs", Easy),
            ("Min Cost Climbing Stairs", Easy),
            ("House Robber", Medium),
            ("House Robber II", Medium),
            ("Longest Palindromic Substring", Medium),
            ("Palindromic Substrings", Medium),
            ("Decode Ways", Medium),
            ("Coin Change", Medium),
            ("Maximum Product Subarray", Medium),
            ("Word Break", Medium),
            ("Longest Increasing Subsequence", Medium),
            ("Partition Equal Subset Sum", Medium),
        ],
        hard_list: &["Decode Ways", "Word Break", "Partition Equal Subset Sum"],
    },
    SeedCategory {
        name: "2-D Dynamic Programming",
        icon: "🧩",
        problems: &[
            ("Unique Paths", Medium),
            ("Longest Common Subsequence", Medium),
            ("Best Time to Buy and Sell Stock with Cooldown", Medium),
            ("Coin Change II", Medium),
            ("Target Sum", Medium),
            ("Interleaving String", Medium),
            ("Longest Increasing Path in a Matrix", Hard),
            ("Distinct Subsequences", Hard),
            ("Edit Distance", Medium),
            ("Burst Balloons", Hard),
            ("Regular Expression Matching", Hard),
        ],
        hard_list: &["Edit Distance", "Burst Balloons", "Regular Expression Matching"],
    },
    SeedCategory {
        name: "Greedy",
        icon: "💰",
        problems: &[
            ("Maximum Subarray", Medium),
            ("Jump Game", Medium),
            ("Jump Game II", Medium),
            ("Gas Station", Medium),
            ("Hand of Straights", Medium),
            ("Merge Triplets to Form Target Triplet", Medium),
            ("Partition Labels", Medium),
            ("Valid Parenthesis String", Medium),
        ],
        hard_list: &["Gas Station", "Valid Parenthesis String"],
    },
    SeedCategory {
        name: "Intervals",
        icon: "📏",
        problems: &[
            ("Insert Interval", Medium),
            ("Merge Intervals", Medium),
            ("Non-overlapping Intervals", Medium),
            ("Meeting Rooms", Easy),
            ("Meeting Rooms II", Medium),
            ("Minimum Interval to Include Each Query", Hard),
        ],
        hard_list: &["Minimum Interval to Include Each Query"],
    },
    SeedCategory {
        name: "Math & Geometry",
        icon: "📐",
        problems: &[
            ("Rotate Image", Medium),
            ("Spiral Matrix", Medium),
            ("Set Matrix Zeroes", Medium),
            ("Happy Number", Easy),
            ("Plus One", Easy),
            ("Pow(x, n)", Medium),
            ("Multiply Strings", Medium),
            ("Detect Squares", Medium),
        ],
        hard_list: &["Multiply Strings", "Detect Squares"],
    },
    SeedCategory {
        name: "Bit Manipulation",
        icon: "💡",
        problems: &[
            ("Single Number", Easy),
            ("Number of 1 Bits", Easy),
            ("Counting Bits", Easy),
            ("Reverse Bits", Easy),
            ("Missing Number", Easy),
            ("Sum of Two Integers", Medium),
            ("Reverse Integer", Medium),
        ],
        hard_list: &["Sum of Two Integers", "Reverse Integer"],
    },
];
