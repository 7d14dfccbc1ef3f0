//! Prerequisite graph over the whole catalog.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::catalog::{normalize_code, Catalog};

use super::parser::LogicTree;

/// Course-to-prerequisite edges for every catalog course.
///
/// Nodes are normalized codes. Prerequisites outside the catalog appear as
/// nodes without edges of their own.
#[derive(Debug, Clone, Default)]
pub struct PrerequisiteGraph {
    prerequisites: BTreeMap<String, BTreeSet<String>>,
}

impl PrerequisiteGraph {
    /// Build the graph from each course's parsed prerequisite text.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut graph = Self::default();
        for course in catalog.iter() {
            let tree = LogicTree::parse(&course.raw_prerequisites);
            graph.add_course(&course.normalized_code, tree.codes());
        }
        graph
    }

    /// Add a course and its prerequisite codes (any spelling).
    pub fn add_course<'c>(&mut self, code: &str, prerequisites: impl IntoIterator<Item = &'c str>) {
        let key = normalize_code(code);
        if key.is_empty() {
            return;
        }
        let edges: BTreeSet<String> = prerequisites
            .into_iter()
            .map(normalize_code)
            .filter(|c| !c.is_empty())
            .collect();
        for edge in &edges {
            self.prerequisites.entry(edge.clone()).or_default();
        }
        self.prerequisites.entry(key).or_default().extend(edges);
    }

    /// Direct prerequisites of a course.
    pub fn prerequisites_of(&self, code: &str) -> Option<&BTreeSet<String>> {
        self.prerequisites.get(&normalize_code(code))
    }

    /// Number of courses in the graph.
    pub fn len(&self) -> usize {
        self.prerequisites.len()
    }

    /// Whether the graph is empty.
    pub fn is_empty(&self) -> bool {
        self.prerequisites.is_empty()
    }

    /// One cycle per back edge found by a depth-first walk in code order.
    ///
    /// Every course that sits on a cycle appears in at least one result.
    pub fn find_cycles(&self) -> Vec<Vec<String>> {
        #[derive(Clone, Copy, PartialEq)]
        enum State {
            Unvisited,
            Visiting,
            Visited,
        }

        fn dfs<'a>(
            node: &'a str,
            graph: &'a PrerequisiteGraph,
            state: &mut HashMap<&'a str, State>,
            path: &mut Vec<&'a str>,
            cycles: &mut Vec<Vec<String>>,
        ) {
            state.insert(node, State::Visiting);
            path.push(node);

            if let Some(prereqs) = graph.prerequisites.get(node) {
                for prereq in prereqs {
                    match state.get(prereq.as_str()) {
                        Some(State::Visiting) => {
                            if let Some(start) = path.iter().position(|s| *s == prereq.as_str()) {
                                let mut cycle: Vec<String> =
                                    path[start..].iter().map(|s| s.to_string()).collect();
                                cycle.push(prereq.clone());
                                cycles.push(cycle);
                            }
                        }
                        Some(State::Unvisited) | None => {
                            dfs(prereq, graph, state, path, cycles);
                        }
                        Some(State::Visited) => {}
                    }
                }
            }

            path.pop();
            state.insert(node, State::Visited);
        }

        let mut state: HashMap<&str, State> = self
            .prerequisites
            .keys()
            .map(|k| (k.as_str(), State::Unvisited))
            .collect();
        let mut path = Vec::new();
        let mut cycles = Vec::new();

        for code in self.prerequisites.keys() {
            if state.get(code.as_str()) == Some(&State::Unvisited) {
                dfs(code, self, &mut state, &mut path, &mut cycles);
            }
        }

        cycles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Course;

    fn course(code: &str, prereqs: &str) -> Course {
        Course {
            display_code: code.to_string(),
            raw_prerequisites: prereqs.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn acyclic_catalog_has_no_cycle() {
        let catalog: Catalog = vec![
            course("ECON 102", ""),
            course("ECON 302", "ECON 102"),
            course("ECON 442", "ECON 302 or ECON 304"),
        ]
        .into_iter()
        .collect();
        let graph = PrerequisiteGraph::from_catalog(&catalog);
        assert!(graph.find_cycles().is_empty());
        assert!(graph.prerequisites_of("ECON 442").unwrap().contains("ECON304"));
        assert_eq!(graph.len(), 4);
    }

    #[test]
    fn two_course_cycle_is_found() {
        let catalog: Catalog = vec![course("CMPSC 101", "CMPSC 102"), course("CMPSC 102", "CMPSC 101")]
            .into_iter()
            .collect();
        let graph = PrerequisiteGraph::from_catalog(&catalog);
        assert_eq!(
            graph.find_cycles(),
            vec![vec![
                "CMPSC101".to_string(),
                "CMPSC102".to_string(),
                "CMPSC101".to_string()
            ]]
        );
    }

    #[test]
    fn separate_cycles_are_each_reported() {
        let mut graph = PrerequisiteGraph::default();
        graph.add_course("A 1", ["A 2"]);
        graph.add_course("A 2", ["A 1"]);
        graph.add_course("B 1", ["B 1"]);
        let cycles = graph.find_cycles();
        assert_eq!(cycles.len(), 2);
        assert_eq!(cycles[1], vec!["B1".to_string(), "B1".to_string()]);
    }
}
