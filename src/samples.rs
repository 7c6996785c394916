//! Built-in sample snippets
//!
//! The catalog mirrors the algorithm templates offered in the editor. Only
//! the array samples (sort, search, reversal) reach a dedicated simulator;
//! the tree and graph samples fall through to the generic one.

/// One entry of the sample catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    BubbleSort,
    LinearSearch,
    ReverseArray,
    BinaryTreeTraversal,
    BinarySearchTree,
    AvlTree,
    GraphDfs,
    GraphBfs,
    Dijkstra,
}

impl Sample {
    pub const ALL: [Sample; 9] = [
        Sample::BubbleSort,
        Sample::LinearSearch,
        Sample::ReverseArray,
        Sample::BinaryTreeTraversal,
        Sample::BinarySearchTree,
        Sample::AvlTree,
        Sample::GraphDfs,
        Sample::GraphBfs,
        Sample::Dijkstra,
    ];

    /// Identifier accepted by `--sample`
    pub fn id(self) -> &'static str {
        match self {
            Sample::BubbleSort => "bubble-sort",
            Sample::LinearSearch => "linear-search",
            Sample::ReverseArray => "reverse-array",
            Sample::BinaryTreeTraversal => "tree-traversal",
            Sample::BinarySearchTree => "binary-search-tree",
            Sample::AvlTree => "avl-tree",
            Sample::GraphDfs => "graph-dfs",
            Sample::GraphBfs => "graph-bfs",
            Sample::Dijkstra => "dijkstra",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Sample::BubbleSort => "Bubble Sort",
            Sample::LinearSearch => "Linear Search",
            Sample::ReverseArray => "Array Reversal",
            Sample::BinaryTreeTraversal => "Binary Tree Traversal",
            Sample::BinarySearchTree => "Binary Search Tree",
            Sample::AvlTree => "AVL Tree (Self-Balancing)",
            Sample::GraphDfs => "Graph Depth-First Search",
            Sample::GraphBfs => "Graph Breadth-First Search",
            Sample::Dijkstra => "Dijkstra's Shortest Path",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Next entry, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Previous entry, wrapping around
    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn source(self) -> &'static str {
        match self {
            Sample::BubbleSort => BUBBLE_SORT,
            Sample::LinearSearch => LINEAR_SEARCH,
            Sample::ReverseArray => REVERSE_ARRAY,
            Sample::BinaryTreeTraversal => BINARY_TREE_TRAVERSAL,
            Sample::BinarySearchTree => BINARY_SEARCH_TREE,
            Sample::AvlTree => AVL_TREE,
            Sample::GraphDfs => GRAPH_DFS,
            Sample::GraphBfs => GRAPH_BFS,
            Sample::Dijkstra => DIJKSTRA,
        }
    }
}

const BUBBLE_SORT: &str = r#"int[] arr = {64, 34, 25, 12, 22, 11, 90};
int n = arr.length;
for (int i = 0; i < n-1; i++) {
    for (int j = 0; j < n-i-1; j++) {
        if (arr[j] > arr[j+1]) {
            int temp = arr[j];
            arr[j] = arr[j+1];
            arr[j+1] = temp;
        }
    }
}"#;

const LINEAR_SEARCH: &str = r#"int[] arr = {2, 3, 4, 10, 40, 15, 25};
int target = 10;
int i = 0;
for (i = 0; i < arr.length; i++) {
    if (arr[i] == target) {
        break;
    }
}"#;

const REVERSE_ARRAY: &str = r#"int[] arr = {1, 2, 3, 4, 5, 6, 7};
int start = 0;
int end = arr.length - 1;
while (start < end) {
    int temp = arr[start];
    arr[start] = arr[end];
    arr[end] = temp;
    start++;
    end--;
}"#;

const BINARY_TREE_TRAVERSAL: &str = r#"// Binary Tree Inorder Traversal
TreeNode root = new TreeNode(50);
root.left = new TreeNode(30);
root.right = new TreeNode(70);
root.left.left = new TreeNode(20);
root.left.right = new TreeNode(40);
root.right.left = new TreeNode(60);
root.right.right = new TreeNode(80);

// Inorder: Left -> Root -> Right
void inorderTraversal(TreeNode node) {
    if (node != null) {
        inorderTraversal(node.left);
        visit(node.val);
        inorderTraversal(node.right);
    }
}"#;

const BINARY_SEARCH_TREE: &str = r#"// Binary Search Tree Operations
TreeNode root = null;
int[] values = {50, 30, 70, 20, 40, 60, 80};

for (int val : values) {
    root = insert(root, val);
}

TreeNode insert(TreeNode root, int val) {
    if (root == null) {
        return new TreeNode(val);
    }
    if (val < root.val) {
        root.left = insert(root.left, val);
    } else {
        root.right = insert(root.right, val);
    }
    return root;
}"#;

const AVL_TREE: &str = r#"// AVL Tree (Self-Balancing Binary Search Tree)
AVLNode root = null;
int[] values = {10, 20, 30, 40, 50, 25};

for (int val : values) {
    root = insert(root, val);
}

AVLNode insert(AVLNode node, int key) {
    if (node == null) {
        return new AVLNode(key);
    }
    
    if (key < node.key) {
        node.left = insert(node.left, key);
    } else if (key > node.key) {
        node.right = insert(node.right, key);
    } else {
        return node;
    }
    
    node.height = 1 + Math.max(getHeight(node.left), getHeight(node.right));
    
    int balance = getBalance(node);
    
    // Left Left Case
    if (balance > 1 && key < node.left.key) {
        return rightRotate(node);
    }
    
    // Right Right Case
    if (balance < -1 && key > node.right.key) {
        return leftRotate(node);
    }
    
    // Left Right Case
    if (balance > 1 && key > node.left.key) {
        node.left = leftRotate(node.left);
        return rightRotate(node);
    }
    
    // Right Left Case
    if (balance < -1 && key < node.right.key) {
        node.right = rightRotate(node.right);
        return leftRotate(node);
    }
    
    return node;
}"#;

const GRAPH_DFS: &str = r#"// Graph Depth-First Search
Graph graph = new Graph(7);
graph.addEdge(0, 1);
graph.addEdge(0, 2);
graph.addEdge(1, 3);
graph.addEdge(1, 4);
graph.addEdge(2, 5);
graph.addEdge(2, 6);

boolean[] visited = new boolean[7];

void dfs(int vertex) {
    visited[vertex] = true;
    visit(vertex);
    
    for (int neighbor : graph.getNeighbors(vertex)) {
        if (!visited[neighbor]) {
            dfs(neighbor);
        }
    }
}"#;

const GRAPH_BFS: &str = r#"// Graph Breadth-First Search
Graph graph = new Graph(6);
graph.addEdge(0, 1);
graph.addEdge(0, 2);
graph.addEdge(1, 3);
graph.addEdge(2, 4);
graph.addEdge(3, 5);
graph.addEdge(4, 5);

Queue<Integer> queue = new LinkedList<>();
boolean[] visited = new boolean[6];

void bfs(int start) {
    queue.offer(start);
    visited[start] = true;
    
    while (!queue.isEmpty()) {
        int vertex = queue.poll();
        visit(vertex);
        
        for (int neighbor : graph.getNeighbors(vertex)) {
            if (!visited[neighbor]) {
                visited[neighbor] = true;
                queue.offer(neighbor);
            }
        }
    }
}"#;

const DIJKSTRA: &str = r#"// Dijkstra's Shortest Path Algorithm
int[][] graph = {
    {0, 4, 0, 0, 0, 0, 0, 8, 0},
    {4, 0, 8, 0, 0, 0, 0, 11, 0},
    {0, 8, 0, 7, 0, 4, 0, 0, 2},
    {0, 0, 7, 0, 9, 14, 0, 0, 0},
    {0, 0, 0, 9, 0, 10, 0, 0, 0},
    {0, 0, 4, 14, 10, 0, 2, 0, 0},
    {0, 0, 0, 0, 0, 2, 0, 1, 6},
    {8, 11, 0, 0, 0, 0, 1, 0, 7},
    {0, 0, 2, 0, 0, 0, 6, 7, 0}
};

int[] dist = new int[9];
boolean[] visited = new boolean[9];

for (int i = 0; i < 9; i++) {
    dist[i] = Integer.MAX_VALUE;
}
dist[0] = 0;

for (int count = 0; count < 8; count++) {
    int u = minDistance(dist, visited);
    visited[u] = true;
    
    for (int v = 0; v < 9; v++) {
        if (!visited[v] && graph[u][v] != 0 && 
            dist[u] != Integer.MAX_VALUE && 
            dist[u] + graph[u][v] < dist[v]) {
            dist[v] = dist[u] + graph[u][v];
        }
    }
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for sample in Sample::ALL {
            assert_eq!(Sample::from_id(sample.id()), Some(sample));
        }
        assert_eq!(Sample::from_id("quick-sort"), None);
    }

    #[test]
    fn test_cycling_wraps() {
        assert_eq!(Sample::Dijkstra.next(), Sample::BubbleSort);
        assert_eq!(Sample::BubbleSort.prev(), Sample::Dijkstra);
    }
}
