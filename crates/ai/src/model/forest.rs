use serde::Deserialize;

use super::{Classifier, argmax, check_unique_names};
use crate::result::PredictError;

/// A node of a regression tree.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// Go to `left` when `row[feature] < threshold`, else `right`.
    /// Missing (NaN) values follow `default_left`.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
        #[serde(default)]
        default_left: bool,
    },
    Leaf {
        leaf: f64,
    },
}

/// A single tree; node 0 is the root and children always come after their parent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    fn validate(&self, n_features: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".to_string());
        }
        for (idx, node) in self.nodes.iter().enumerate() {
            if let Node::Split {
                feature, left, right, ..
            } = node
            {
                if *feature >= n_features {
                    return Err(format!("node {idx} splits on feature {feature} of {n_features}"));
                }
                for child in [*left, *right] {
                    if child <= idx || child >= self.nodes.len() {
                        return Err(format!("node {idx} has invalid child {child}"));
                    }
                }
            }
        }
        Ok(())
    }

    fn leaf_value(&self, row: &[f64]) -> f64 {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                Node::Leaf { leaf } => return *leaf,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                    default_left,
                } => {
                    let x = row[*feature];
                    idx = if x.is_nan() {
                        if *default_left { *left } else { *right }
                    } else if x < *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }
}

/// Gradient-boosted tree ensemble.
///
/// Tree `i` adds its leaf value to output group `i % groups`, where a
/// two-class model has a single group (a logit margin) and a k-class model has
/// k groups. `base_score` is the starting margin of every group.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TreeEnsemble {
    classes: Vec<i64>,
    n_features: usize,
    #[serde(default)]
    base_score: f64,
    trees: Vec<Tree>,
    #[serde(default)]
    feature_names: Vec<String>,
}

impl TreeEnsemble {
    pub fn new(
        classes: Vec<i64>,
        n_features: usize,
        base_score: f64,
        trees: Vec<Tree>,
        feature_names: Vec<String>,
    ) -> Result<Self, String> {
        let model = Self {
            classes,
            n_features,
            base_score,
            trees,
            feature_names,
        };
        model.validate()?;
        Ok(model)
    }

    fn groups(&self) -> usize {
        if self.classes.len() == 2 { 1 } else { self.classes.len() }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.classes.len() < 2 {
            return Err(format!("expected at least 2 classes, found {}", self.classes.len()));
        }
        if self.trees.is_empty() || self.trees.len() % self.groups() != 0 {
            return Err(format!(
                "{} trees cannot be split evenly over {} output group(s)",
                self.trees.len(),
                self.groups()
            ));
        }
        if !self.feature_names.is_empty() && self.feature_names.len() != self.n_features {
            return Err(format!(
                "{} feature names for {} features",
                self.feature_names.len(),
                self.n_features
            ));
        }
        check_unique_names(&self.feature_names)?;
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(self.n_features).map_err(|e| format!("tree {i}: {e}"))?;
        }
        Ok(())
    }
}

impl Classifier for TreeEnsemble {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn classes(&self) -> &[i64] {
        &self.classes
    }

    fn decide(&self, row: &[f64]) -> Result<i64, PredictError> {
        if row.len() != self.n_features {
            return Err(PredictError::inference(format!(
                "row has {} values, expected {}",
                row.len(),
                self.n_features
            )));
        }

        let groups = self.groups();
        let mut margins = vec![self.base_score; groups];
        for (i, tree) in self.trees.iter().enumerate() {
            margins[i % groups] += tree.leaf_value(row);
        }

        let class = if groups == 1 {
            usize::from(margins[0] > 0.0)
        } else {
            argmax(&margins)
        };
        Ok(self.classes[class])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stump(feature: usize, threshold: f64, below: f64, above: f64) -> Tree {
        Tree::new(vec![
            Node::Split {
                feature,
                threshold,
                left: 1,
                right: 2,
                default_left: true,
            },
            Node::Leaf { leaf: below },
            Node::Leaf { leaf: above },
        ])
    }

    #[test]
    fn binary_ensemble_sums_margins() {
        let model = TreeEnsemble::new(
            vec![0, 1],
            2,
            0.0,
            vec![stump(0, 3.0, -1.0, 1.0), stump(1, 10.0, -0.2, 0.5)],
            vec![],
        )
        .unwrap();

        assert_eq!(model.decide(&[5.0, 0.0]).unwrap(), 1);
        assert_eq!(model.decide(&[1.0, 20.0]).unwrap(), 0);
    }

    #[test]
    fn missing_values_follow_the_default_branch() {
        let model = TreeEnsemble::new(vec![0, 1], 1, 0.0, vec![stump(0, 3.0, 1.0, -1.0)], vec![]).unwrap();
        assert_eq!(model.decide(&[f64::NAN]).unwrap(), 1);
    }

    #[test]
    fn multiclass_trees_are_grouped_round_robin() {
        // Trees 0..4 feed classes 0..4, trees 4..8 feed them again.
        let mut trees: Vec<Tree> = (0..4).map(|_| stump(0, 0.0, 0.0, 0.0)).collect();
        trees.extend((0..4).map(|c| {
            let boost = if c == 2 { 1.0 } else { 0.0 };
            stump(0, 0.0, 0.0, boost)
        }));
        let model = TreeEnsemble::new(vec![0, 1, 2, 3], 1, 0.0, trees, vec![]).unwrap();

        assert_eq!(model.decide(&[1.0]).unwrap(), 2);
        assert_eq!(model.decide(&[-1.0]).unwrap(), 0);
    }

    #[test]
    fn deserializes_split_and_leaf_nodes() {
        let model: TreeEnsemble = serde_json::from_value(json!({
            "classes": [0, 1],
            "n_features": 1,
            "trees": [{"nodes": [
                {"feature": 0, "threshold": 0.5, "left": 1, "right": 2},
                {"leaf": -0.4},
                {"leaf": 0.4}
            ]}]
        }))
        .unwrap();

        assert!(model.validate().is_ok());
        assert_eq!(model.decide(&[1.0]).unwrap(), 1);
        assert_eq!(model.decide(&[f64::NAN]).unwrap(), 1);
    }

    #[test]
    fn rejects_backward_or_out_of_range_children() {
        let cyclic = Tree::new(vec![
            Node::Split {
                feature: 0,
                threshold: 0.0,
                left: 0,
                right: 1,
                default_left: false,
            },
            Node::Leaf { leaf: 0.0 },
        ]);
        assert!(TreeEnsemble::new(vec![0, 1], 1, 0.0, vec![cyclic], vec![]).is_err());
        assert!(TreeEnsemble::new(vec![0, 1], 1, 0.0, vec![stump(3, 0.0, 0.0, 0.0)], vec![]).is_err());
        assert!(TreeEnsemble::new(vec![0, 1, 2], 1, 0.0, vec![stump(0, 0.0, 0.0, 0.0)], vec![]).is_err());
    }

    #[test]
    fn repeated_feature_names_are_invalid() {
        let names = vec!["lat".to_string(), "lat".to_string()];
        let err = TreeEnsemble::new(vec![0, 1], 2, 0.0, vec![stump(0, 1.0, 0.0, 1.0)], names).unwrap_err();
        assert_eq!(err, "duplicate feature name 'lat'");
    }
}
