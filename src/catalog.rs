//! Reference descriptions of the known patterns

use crate::types::PatternEntry;

/// Declaration order breaks ties between equal similarity scores.
const PATTERN_CATALOG: [PatternEntry; 6] = [
    PatternEntry {
        pattern: "Binary Search",
        description: "Searching for an element or boundary in a sorted array or list efficiently",
    },
    PatternEntry {
        pattern: "Greedy",
        description: "Selecting the best local option repeatedly to achieve a global optimum, such as activity selection or interval scheduling",
    },
    PatternEntry {
        pattern: "Sliding Window",
        description: "Finding subarrays or contiguous segments with certain properties",
    },
    PatternEntry {
        pattern: "Dynamic Programming",
        description: "Solving optimization problems with overlapping subproblems and optimal substructure",
    },
    PatternEntry {
        pattern: "Graph (BFS / DFS)",
        description: "Traversing nodes and edges to find paths, connectivity, or components",
    },
    PatternEntry {
        pattern: "Two Pointers",
        description: "Using two indices moving through data structures to reduce time complexity",
    },
];

/// All catalog entries in declaration order
pub fn entries() -> &'static [PatternEntry] {
    &PATTERN_CATALOG
}
